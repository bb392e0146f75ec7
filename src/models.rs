use serde::{Deserialize, Serialize};

/// Name block of a country record. Only `common` is used; other variants
/// (`official`, `nativeName`) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
}

/// Flag image links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub png: Option<String>,
    pub svg: Option<String>,
}

/// One country record as returned by the REST Countries API (`/v3.1/all`).
///
/// Only `name` is required. Everything else tolerates absence; `population`
/// is hardened to `0` when missing or not numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub flags: Option<Flags>,
    #[serde(default)]
    pub cca2: Option<String>,
    #[serde(default)]
    pub cca3: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de_population")]
    pub population: u64,
    #[serde(default)]
    pub area: Option<f64>,
}

impl Country {
    /// Minimal record, mostly useful for fixtures.
    pub fn new(common: impl Into<String>, population: u64) -> Self {
        Self {
            name: CountryName {
                common: common.into(),
            },
            flags: None,
            cca2: None,
            cca3: None,
            region: None,
            capital: None,
            population,
            area: None,
        }
    }

    pub fn with_codes(mut self, cca2: &str, cca3: &str) -> Self {
        self.cca2 = Some(cca2.into());
        self.cca3 = Some(cca3.into());
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_capital(mut self, capital: &str) -> Self {
        self.capital = Some(vec![capital.into()]);
        self
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    /// Display name; also the favorites key.
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// First listed capital, if any.
    pub fn first_capital(&self) -> Option<&str> {
        self.capital
            .as_ref()
            .and_then(|c| c.first())
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    pub fn flag_png(&self) -> Option<&str> {
        self.flags.as_ref().and_then(|f| f.png.as_deref())
    }

    /// Area in km², treating `0` and non-finite values as unknown.
    pub fn known_area(&self) -> Option<f64> {
        self.area.filter(|a| a.is_finite() && *a > 0.0)
    }
}

/// Serde helper: parse population from a JSON number, numeric string, or `null`.
///
/// Anything that is not a non-negative number decodes as `0`.
fn de_population<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct PopulationVisitor;

    impl<'de> Visitor<'de> for PopulationVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a population count")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            Ok(v.max(0) as u64)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
            if v.is_finite() && v > 0.0 {
                Ok(v as u64)
            } else {
                Ok(0)
            }
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<u64, E> {
            let s = s.trim();
            if let Ok(v) = s.parse::<u64>() {
                return Ok(v);
            }
            match s.parse::<f64>() {
                Ok(f) => self.visit_f64(f),
                Err(_) => Ok(0),
            }
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<u64, A::Error> {
            while seq.next_element::<de::IgnoredAny>()?.is_some() {}
            Ok(0)
        }

        fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<u64, A::Error> {
            while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
            Ok(0)
        }
    }

    deserializer.deserialize_any(PopulationVisitor)
}

/// Color scheme of the desktop front end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
