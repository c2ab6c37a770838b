use std::sync::Arc;

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{event, keyboard, Alignment, Element, Fill, Padding, Subscription, Task, Theme};

use crate::catalog::{self, Cuisine, SearchResult};
use crate::config::Config;
use crate::error::SearchError;
use crate::page::SearchPage;
use crate::route::Route;
use crate::search::{MockSearchService, SearchRequest, SearchService};
use crate::store::SearchStore;
use crate::ui::{filter_panel, result_list, search_input, suggestions, theme};

/// The view currently on screen. Dropping a page aborts its pending search.
enum Screen {
    Search(SearchPage),
    Results,
}

pub struct State {
    store: SearchStore,
    screen: Screen,
    service: Arc<dyn SearchService>,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    SuggestionSelected(String),
    ToggleFilters,
    CloseFilters,
    ApplyFilters,
    CuisineToggled(Cuisine),
    PriceCeilingChanged(u32),
    SearchFinished {
        request_id: u64,
        outcome: Result<Vec<SearchResult>, SearchError>,
    },
    EscapePressed,
    BackToSearch,
}

impl State {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let results = load_mock_results(&config);
        let service = MockSearchService::new(results, config.search.delay());
        tracing::info!("Using mock search service with {:?} delay", service.delay());
        Self::with_service(Arc::new(service))
    }

    /// Start on the search page backed by `service`.
    pub fn with_service(service: Arc<dyn SearchService>) -> (Self, Task<Message>) {
        let store = SearchStore::new();
        let state = Self {
            screen: Screen::Search(SearchPage::new(&store)),
            store,
            service,
        };
        (state, iced::widget::operation::focus(search_input::SEARCH_INPUT_ID))
    }

    pub fn title(&self) -> String {
        match self.screen {
            Screen::Search(_) => String::from("Platter"),
            Screen::Results => format!("Platter · {}", self.store.search_query()),
        }
    }

    pub fn route(&self) -> Route {
        match self.screen {
            Screen::Search(_) => Route::Search,
            Screen::Results => Route::Results,
        }
    }

    /// Whether the search page is waiting on a search
    pub fn is_searching(&self) -> bool {
        matches!(&self.screen, Screen::Search(page) if page.is_searching())
    }

    pub fn store(&self) -> &SearchStore {
        &self.store
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::SearchFinished {
                request_id,
                outcome,
            } => {
                let route = match &mut self.screen {
                    Screen::Search(page) => page.finish(request_id, outcome, &mut self.store),
                    Screen::Results => None,
                };
                match route {
                    Some(route) => self.navigate(route),
                    None => Task::none(),
                }
            }
            Message::BackToSearch => self.navigate(Route::Search),
            Message::EscapePressed => match &mut self.screen {
                Screen::Search(page) if page.is_searching() => {
                    page.cancel();
                    Task::none()
                }
                Screen::Search(page) => {
                    page.close_filters();
                    Task::none()
                }
                Screen::Results => self.navigate(Route::Search),
            },
            message => match &mut self.screen {
                Screen::Search(page) => {
                    Self::update_page(page, message, &mut self.store, self.service.as_ref())
                }
                Screen::Results => Task::none(),
            },
        };

        if let Screen::Search(page) = &mut self.screen {
            page.sync_query(&self.store);
        }
        task
    }

    fn update_page(
        page: &mut SearchPage,
        message: Message,
        store: &mut SearchStore,
        service: &dyn SearchService,
    ) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                page.set_query(query);
                Task::none()
            }
            Message::Submit => {
                if page.is_searching() {
                    return Task::none();
                }
                match page.submit(store) {
                    Ok(request) => run_search(page, service, request),
                    Err(e) => {
                        tracing::debug!("Ignoring submit: {}", e);
                        Task::none()
                    }
                }
            }
            Message::SuggestionSelected(term) => {
                let request = page.select_suggestion(&term, store);
                run_search(page, service, request)
            }
            Message::ToggleFilters => {
                page.toggle_filters();
                Task::none()
            }
            Message::CloseFilters | Message::ApplyFilters => {
                page.close_filters();
                Task::none()
            }
            Message::CuisineToggled(cuisine) => {
                page.toggle_cuisine(cuisine);
                Task::none()
            }
            Message::PriceCeilingChanged(value) => {
                page.set_price_ceiling(value);
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        tracing::info!("Navigating to {}", route.path());
        match route {
            Route::Search => {
                // remount: the new page picks its query up from the store
                self.screen = Screen::Search(SearchPage::new(&self.store));
                iced::widget::operation::focus(search_input::SEARCH_INPUT_ID)
            }
            Route::Results => {
                self.screen = Screen::Results;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.screen {
            Screen::Search(page) => {
                let mut body = column![search_input::view(
                    page.query(),
                    page.is_searching(),
                    page.last_error(),
                )]
                .spacing(24);
                if page.filters_open() {
                    body = body.push(filter_panel::view(page.filters()));
                }
                body = body.push(suggestions::view());
                scrollable(body.max_width(760)).height(Fill).into()
            }
            Screen::Results => {
                let header = row![
                    column![
                        text(format!("Results for \"{}\"", self.store.search_query()))
                            .size(20)
                            .style(theme::heading),
                        text(format!("{} dishes compared", self.store.results().len()))
                            .size(13)
                            .style(theme::muted),
                    ]
                    .spacing(4),
                    Space::new().width(Fill),
                    button(text("Back to search").size(14))
                        .on_press(Message::BackToSearch)
                        .padding([8, 16])
                        .style(theme::chip),
                ]
                .align_y(Alignment::Center);

                column![header, result_list::view(self.store.results())]
                    .spacing(16)
                    .max_width(760)
                    .into()
            }
        };

        container(content)
            .padding(Padding::new(24.0))
            .center_x(Fill)
            .height(Fill)
            .style(theme::page)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Run `request` on the service as an abortable task owned by the page.
fn run_search(
    page: &mut SearchPage,
    service: &dyn SearchService,
    request: SearchRequest,
) -> Task<Message> {
    let request_id = request.id;
    tracing::debug!("Dispatching search #{} to {} service", request_id, service.name());
    let (task, handle) = Task::perform(service.search(request), move |outcome| {
        Message::SearchFinished {
            request_id,
            outcome,
        }
    })
    .abortable();
    page.track(request_id, handle);
    task
}

fn load_mock_results(config: &Config) -> Vec<SearchResult> {
    if let Some(path) = &config.search.mock_data {
        match catalog::load_results(path) {
            Ok(results) => {
                tracing::info!("Loaded {} mock results from {:?}", results.len(), path);
                return results;
            }
            Err(e) => tracing::warn!("{}, using bundled mock data", e),
        }
    }
    catalog::bundled_results().unwrap_or_else(|e| {
        tracing::error!("Bundled mock data is broken: {}", e);
        Vec::new()
    })
}
