pub mod detail;
pub mod home;
pub mod search;

pub use detail::Detail;
pub use home::Home;
pub use search::Search;

use crate::pokeapi::Identifier;
use crate::router;

use iced::Task;

pub enum Screen {
    Home(Home),
    Search(Search),
    Detail(Detail),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Search(String),
    Detail(Identifier),
}

/// What a screen asks of the application after an update.
pub enum Action<Message> {
    None,
    Run(Task<Message>),
    Navigate(Route),
    Replace(Route),
    Back,
}

impl router::Teardown for Screen {
    fn teardown(&mut self) {
        match self {
            Screen::Home(home) => home.teardown(),
            Screen::Search(search) => search.teardown(),
            Screen::Detail(detail) => detail.teardown(),
        }
    }
}
