use crate::pokeapi::Identifier;
use crate::pokeapi::loader::{self, Failure, Loader, Source};
use crate::screen::{Action, Route};
use crate::widget::pokeball;

use iced::keyboard;
use iced::task;
use iced::widget::{button, center, column, text};
use iced::{Center, Element, Subscription, Task};

pub struct Search {
    query: String,
    loader: Loader,
    task: Option<task::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(loader::Update),
    SearchAgain,
    Cancel,
}

impl Search {
    pub fn new(query: String, source: &impl Source) -> (Self, Task<Message>) {
        let mut loader = Loader::new();

        let (task, handle) = Task::run(loader.load(source, &query), Message::Loaded).abortable();

        (
            Self {
                query,
                loader,
                task: Some(handle.abort_on_drop()),
            },
            task,
        )
    }

    pub fn update(&mut self, message: Message) -> Action<Message> {
        match message {
            Message::Loaded(update) => {
                if !self.loader.apply(update) {
                    return Action::None;
                }

                match self.loader.state() {
                    loader::State::Pending => Action::None,
                    loader::State::Ready(pokemon) => {
                        self.task = None;

                        Action::Replace(Route::Detail(Identifier::from(pokemon.id)))
                    }
                    loader::State::Failed(failure) => {
                        log::info!("Search for {:?} failed: {failure:?}", self.query);

                        self.task = None;

                        Action::None
                    }
                }
            }
            Message::SearchAgain | Message::Cancel => Action::Back,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<_> = match self.loader.state() {
            loader::State::Pending | loader::State::Ready(_) => column![
                pokeball(64, None),
                text!("Looking for \"{}\"...", self.query).size(18),
                button("Cancel").on_press(Message::Cancel).padding([10, 20]),
            ]
            .spacing(20)
            .align_x(Center)
            .into(),
            loader::State::Failed(failure) => {
                let (title, hint) = explain(*failure);

                column![text(title).size(24)]
                    .push_maybe(hint.map(|hint| text(hint).size(14)))
                    .push(
                        button("Search again")
                            .on_press(Message::SearchAgain)
                            .padding([10, 20]),
                    )
                    .spacing(20)
                    .align_x(Center)
                    .into()
            }
        };

        center(content).padding(20).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| {
            use keyboard::key::{Key, Named};

            match key.as_ref() {
                Key::Named(Named::Escape) => Some(Message::Cancel),
                _ => None,
            }
        })
    }

    pub fn teardown(&mut self) {
        self.loader.cancel();
        self.task = None;
    }
}

fn explain(failure: Failure) -> (&'static str, Option<&'static str>) {
    match failure {
        Failure::NotFound => ("Pokémon not found", None),
        Failure::EmptyQuery => (
            "Pokémon not found",
            Some("Type a name or a number to search"),
        ),
    }
}
