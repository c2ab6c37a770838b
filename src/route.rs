/// Views the application can navigate between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Search,
    Results,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Search => "/search",
            Route::Results => "/results",
        }
    }
}
