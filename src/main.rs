use pokeapi;

mod artwork;
mod router;
mod screen;
mod widget;

use crate::pokeapi::Session;
use crate::router::Router;
use crate::screen::{Action, Route, Screen, detail, home, search};

use iced::{Element, Subscription, Task, Theme};
use std::env;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Pokedex::new, Pokedex::update, Pokedex::view)
        .subscription(Pokedex::subscription)
        .theme(Pokedex::theme)
        .window_size((1280.0, 900.0))
        .run()
}

struct Pokedex {
    session: Session,
    router: Router<Screen>,
}

#[derive(Debug, Clone)]
enum Message {
    Home(home::Message),
    Search(search::Message),
    Detail(detail::Message),
}

impl Pokedex {
    fn new() -> (Self, Task<Message>) {
        let retries = env::var("POKEDEX_RETRIES")
            .ok()
            .and_then(|retries| match retries.parse::<usize>() {
                Ok(retries) => Some(retries),
                Err(error) => {
                    log::warn!("Ignoring POKEDEX_RETRIES={retries:?}: {error}");

                    None
                }
            })
            .unwrap_or(0);

        let session = Session::new(env::var("POKEAPI_URL").ok()).with_retries(retries);

        (
            Self {
                session,
                router: Router::new(Screen::Home(screen::Home::new())),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(message) => {
                // The grid keeps loading underneath other screens
                let Some(home) = self.router.screens_mut().find_map(|screen| match screen {
                    Screen::Home(home) => Some(home),
                    Screen::Search(_) | Screen::Detail(_) => None,
                }) else {
                    return Task::none();
                };

                let action = home.update(message, &self.session);

                self.perform(action, Message::Home)
            }
            Message::Search(message) => {
                let Screen::Search(search) = self.router.current_mut() else {
                    return Task::none();
                };

                let action = search.update(message);

                self.perform(action, Message::Search)
            }
            Message::Detail(message) => {
                let Screen::Detail(detail) = self.router.current_mut() else {
                    return Task::none();
                };

                let action = detail.update(message, &self.session);

                self.perform(action, Message::Detail)
            }
        }
    }

    fn perform<T>(&mut self, action: Action<T>, to_message: fn(T) -> Message) -> Task<Message>
    where
        T: Send + 'static,
    {
        match action {
            Action::None => Task::none(),
            Action::Run(task) => task.map(to_message),
            Action::Navigate(route) => {
                log::info!("Navigating to {route:?}");

                let (screen, task) = open(route, &self.session);
                self.router.navigate(screen);

                task
            }
            Action::Replace(route) => {
                log::info!("Replacing current screen with {route:?}");

                let (screen, task) = open(route, &self.session);
                self.router.replace(screen);

                task
            }
            Action::Back => {
                if !self.router.back() {
                    log::debug!("Already at the root screen");
                }

                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self.router.current() {
            Screen::Home(home) => home.view().map(Message::Home),
            Screen::Search(search) => search.view().map(Message::Search),
            Screen::Detail(detail) => detail.view().map(Message::Detail),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self.router.current() {
            Screen::Search(search) => search.subscription().map(Message::Search),
            Screen::Detail(detail) => detail.subscription().map(Message::Detail),
            Screen::Home(_) => Subscription::none(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::CatppuccinMocha
    }
}

fn open(route: Route, session: &Session) -> (Screen, Task<Message>) {
    match route {
        Route::Search(query) => {
            let (search, task) = screen::Search::new(query, session);

            (Screen::Search(search), task.map(Message::Search))
        }
        Route::Detail(identifier) => {
            let (detail, task) = screen::Detail::new(identifier, session);

            (Screen::Detail(detail), task.map(Message::Detail))
        }
    }
}
