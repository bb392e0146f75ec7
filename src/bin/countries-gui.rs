/*!
 * Desktop front end for country-explorer
 *
 * A cross-platform window over the same controller the CLI uses:
 * - Filter by name (with suggestions), code, capital, and region
 * - Sort, show favorites or the top 10, toggle the theme
 * - Flag images on every card, fetched and decoded on demand
 * - Click a country name for its detail window and life-index bars
 *
 * Platform support: Windows, macOS, Linux
 */

use country_explorer::app::{App, Event, ViewMode};
use country_explorer::config::Config;
use country_explorer::models::Country;
use country_explorer::storage::{self, JsonFileStore};
use country_explorer::view::{DetailView, LIFE_INDEX_HEADING};
use country_explorer::{Client, FetchError, SortKey, Theme};
use eframe::egui;
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let cfg = Config::from_env();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Country Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Country Explorer",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let app = ExplorerApp::new(cfg)?;
            cc.egui_ctx.set_visuals(visuals(app.app.theme()));
            Ok(Box::new(app))
        }),
    )
}

fn visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    }
}

/// Window state around the controller: text buffers and the pending fetch.
struct ExplorerApp {
    app: App<JsonFileStore>,

    name: String,
    code: String,
    capital: String,
    region: String,
    sort: SortKey,

    applied_theme: Theme,
    is_loading: bool,
    error_message: String,
    load_receiver: Option<mpsc::Receiver<Result<Vec<Country>, FetchError>>>,
}

impl ExplorerApp {
    fn new(cfg: Config) -> anyhow::Result<Self> {
        let store = JsonFileStore::open(cfg.settings_path())?;
        let app = App::new(store, cfg.number_locale());
        let applied_theme = app.theme();

        let (sender, receiver) = mpsc::channel();
        let api_url = cfg.api_url.clone();
        thread::spawn(move || {
            let result = Client::with_base_url(api_url).fetch_all();
            let _ = sender.send(result);
        });

        Ok(Self {
            app,
            name: String::new(),
            code: String::new(),
            capital: String::new(),
            region: String::new(),
            sort: SortKey::None,
            applied_theme,
            is_loading: true,
            error_message: String::new(),
            load_receiver: Some(receiver),
        })
    }

    fn check_load_result(&mut self) {
        if let Some(receiver) = &self.load_receiver
            && let Ok(result) = receiver.try_recv()
        {
            self.is_loading = false;
            self.load_receiver = None;
            let _ = self.app.finish_load(result);
        }
    }

    /// Re-sync the text buffers after the controller reset its criteria.
    fn sync_inputs(&mut self) {
        let c = self.app.criteria();
        self.name = c.name.clone();
        self.code = c.code.clone();
        self.capital = c.capital.clone();
        self.region = c.region.clone();
        self.sort = self.app.sort_key();
    }

    fn export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .add_filter("JSON", &["json"])
            .set_file_name("countries.csv")
            .save_file()
        else {
            return;
        };
        let countries = self.app.visible();
        let result = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => storage::save_json(&countries, &path),
            _ => storage::save_csv(&countries, &path),
        };
        match result {
            Ok(()) => self.error_message.clear(),
            Err(err) => self.error_message = format!("Failed to export: {}", err),
        }
    }

    fn filter_panel(&mut self, ui: &mut egui::Ui, events: &mut Vec<Event>) {
        ui.heading("Filters");
        ui.add_space(5.0);

        ui.label("Name:");
        let name_resp = ui.text_edit_singleline(&mut self.name);
        if name_resp.changed() {
            events.push(Event::NameInput(self.name.clone()));
        }
        if !self.app.suggestions().is_empty() {
            let group = ui.group(|ui| {
                for s in self.app.suggestions() {
                    if ui.selectable_label(false, s.as_str()).clicked() {
                        self.name = s.clone();
                        events.push(Event::PickSuggestion(s.clone()));
                    }
                }
            });
            // A click anywhere but the name field or the list closes it, as does Escape.
            let inside = name_resp.rect.union(group.response.rect);
            let clicked_outside = ui.input(|i| {
                i.pointer.any_click()
                    && i.pointer.interact_pos().is_some_and(|p| !inside.contains(p))
            });
            let escaped = name_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Escape));
            if clicked_outside || escaped {
                events.push(Event::DismissSuggestions);
            }
        }

        ui.label("Code:");
        if ui.text_edit_singleline(&mut self.code).changed() {
            events.push(Event::CodeInput(self.code.clone()));
        }

        ui.label("Capital:");
        if ui.text_edit_singleline(&mut self.capital).changed() {
            events.push(Event::CapitalInput(self.capital.clone()));
        }

        let before = self.region.clone();
        egui::ComboBox::from_label("Region")
            .selected_text(if self.region.is_empty() { "All regions" } else { self.region.as_str() })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.region, String::new(), "All regions");
                for r in self.app.regions() {
                    ui.selectable_value(&mut self.region, r.clone(), r);
                }
            });
        if self.region != before {
            events.push(Event::RegionChange(self.region.clone()));
        }

        let before = self.sort;
        egui::ComboBox::from_label("Sort")
            .selected_text(self.sort.label())
            .show_ui(ui, |ui| {
                for key in [SortKey::None, SortKey::NameAsc, SortKey::PopulationDesc] {
                    ui.selectable_value(&mut self.sort, key, key.label());
                }
            });
        if self.sort != before {
            events.push(Event::SortChange(self.sort));
        }

        ui.add_space(10.0);
        ui.separator();
        if ui.button("⭐ Show favorites").clicked() {
            events.push(Event::ShowFavorites);
        }
        if ui.button("🏆 Top 10").clicked() {
            events.push(Event::ShowTop10);
        }
        if ui.button("Show all").clicked() {
            events.push(Event::ShowAll);
        }
        if ui.button("🌙 Toggle theme").clicked() {
            events.push(Event::ToggleTheme);
        }
        if ui.button("Export…").clicked() {
            self.export();
        }
    }

    fn card_grid(&self, ui: &mut egui::Ui, events: &mut Vec<Event>) {
        let view = self.app.list_view();
        ui.horizontal(|ui| {
            ui.strong(view.status.as_str());
            if self.app.mode() != ViewMode::Browse && ui.small_button("✖").clicked() {
                events.push(Event::ShowAll);
            }
        });
        ui.add_space(5.0);

        if let Some(placeholder) = view.placeholder {
            ui.label(placeholder);
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for card in &view.cards {
                    ui.group(|ui| {
                        ui.set_width(200.0);
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                let name = ui.add(
                                    egui::Label::new(egui::RichText::new(&card.name).strong())
                                        .sense(egui::Sense::click()),
                                );
                                if name.on_hover_text("Show details").clicked() {
                                    events.push(Event::CardClick(card.name.clone()));
                                }
                                if ui.small_button(card.favorite_glyph).clicked() {
                                    events.push(Event::ToggleFavorite(card.name.clone()));
                                }
                            });
                            ui.label(format!("Code: {}", card.codes));
                            ui.label(format!("Region: {}", card.region));
                            ui.label(format!("Capital: {}", card.capital));
                            ui.label(format!("Population: {}", card.population));
                            if let Some(url) = &card.flag_url {
                                ui.add(
                                    egui::Image::new(url.as_str())
                                        .max_width(180.0)
                                        .max_height(100.0),
                                );
                            }
                        });
                    });
                }
            });
        });
    }
}

fn detail_window(ctx: &egui::Context, detail: &DetailView, events: &mut Vec<Event>) {
    let mut open = true;
    egui::Window::new(detail.title.as_str())
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            if let Some(url) = &detail.flag_url {
                ui.add(
                    egui::Image::new(url.as_str())
                        .max_width(240.0)
                        .max_height(140.0),
                );
            }
            ui.label(format!("Capital: {}", detail.capital));
            ui.label(format!("Region: {}", detail.region));
            ui.label(format!("Population: {}", detail.population));
            ui.label(format!("Codes: {}", detail.codes));
            ui.add_space(10.0);
            ui.heading(LIFE_INDEX_HEADING);
            for bar in &detail.bars {
                ui.label(bar.label);
                ui.add(egui::ProgressBar::new(bar.fraction()).text(format!("{}%", bar.value)));
            }
        });
    if !open {
        events.push(Event::CloseDetail);
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_result();
        if self.is_loading {
            ctx.request_repaint();
        }

        let mut events = Vec::new();

        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| self.filter_panel(ui, &mut events));

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.is_loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(self.app.status());
                });
                return;
            }
            if !self.error_message.is_empty() {
                ui.colored_label(egui::Color32::RED, &self.error_message);
            }
            self.card_grid(ui, &mut events);
        });

        if let Some(detail) = self.app.detail() {
            detail_window(ctx, detail, &mut events);
        }

        let reset = events.iter().any(|e| matches!(e, Event::ShowAll));
        for event in events {
            self.app.dispatch(event);
        }
        if reset {
            self.sync_inputs();
        }

        if self.app.theme() != self.applied_theme {
            self.applied_theme = self.app.theme();
            ctx.set_visuals(visuals(self.applied_theme));
        }
    }
}
