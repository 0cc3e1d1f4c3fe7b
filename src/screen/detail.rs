use crate::artwork;
use crate::pokeapi::loader::{self, Loader, Source};
use crate::pokeapi::moves::{self, Badge};
use crate::pokeapi::pokemon::{self, Pokemon};
use crate::pokeapi::{Identifier, Session, catalog};
use crate::screen::{Action, Route};
use crate::widget::{self, badge, pokeball, stat_bar};

use function::Binary;
use iced::border;
use iced::keyboard;
use iced::task;
use iced::widget::{
    button, center, column, container, horizontal_space, image, row, scrollable, text,
};
use iced::{Center, Color, ContentFit, Element, Fill, Subscription, Task};

pub struct Detail {
    identifier: Identifier,
    loader: Loader,
    artwork: Artwork,
    task: Option<task::Handle>,
}

enum Artwork {
    Loading,
    Loaded(image::Handle),
    Errored,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(loader::Update),
    ArtworkFetched(pokemon::Id, Result<artwork::Image, anywho::Error>),
    Previous,
    Next,
    Back,
}

impl Detail {
    pub fn new(identifier: Identifier, source: &impl Source) -> (Self, Task<Message>) {
        let mut loader = Loader::new();

        let (task, handle) = Task::run(
            loader.load(source, &identifier.to_string()),
            Message::Loaded,
        )
        .abortable();

        (
            Self {
                identifier,
                loader,
                artwork: Artwork::Loading,
                task: Some(handle.abort_on_drop()),
            },
            task,
        )
    }

    pub fn update(&mut self, message: Message, session: &Session) -> Action<Message> {
        match message {
            Message::Loaded(update) => {
                if !self.loader.apply(update) {
                    return Action::None;
                }

                match self.loader.state() {
                    loader::State::Pending => Action::None,
                    loader::State::Ready(pokemon) => {
                        let (task, handle) = Task::perform(
                            artwork::Image::fetch(pokemon, session),
                            Message::ArtworkFetched.with(pokemon.id),
                        )
                        .abortable();

                        self.task = Some(handle.abort_on_drop());

                        Action::Run(task)
                    }
                    loader::State::Failed(failure) => {
                        log::info!("{} could not be loaded: {failure:?}", self.identifier);

                        self.task = None;

                        Action::None
                    }
                }
            }
            Message::ArtworkFetched(id, result) => {
                if self.current() != Some(id) {
                    return Action::None;
                }

                self.task = None;
                self.artwork = match result {
                    Ok(image) => Artwork::Loaded(image::Handle::from_rgba(
                        image.width,
                        image.height,
                        image.rgba,
                    )),
                    Err(error) => {
                        log::error!("{error}");

                        Artwork::Errored
                    }
                };

                Action::None
            }
            Message::Previous => self
                .current()
                .and_then(catalog::previous)
                .map(|id| Action::Replace(Route::Detail(Identifier::from(id))))
                .unwrap_or(Action::None),
            Message::Next => self
                .current()
                .and_then(catalog::next)
                .map(|id| Action::Replace(Route::Detail(Identifier::from(id))))
                .unwrap_or(Action::None),
            Message::Back => Action::Back,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self.loader.state() {
            loader::State::Pending => center(
                column![
                    pokeball(64, None),
                    text!("Loading {}...", self.identifier).size(18),
                ]
                .spacing(20)
                .align_x(Center),
            )
            .into(),
            loader::State::Failed(_) => center(
                column![
                    text!("Pokémon \"{}\" could not be loaded", self.identifier).size(24),
                    button("Go back").on_press(Message::Back).padding([10, 20]),
                ]
                .spacing(20)
                .align_x(Center),
            )
            .into(),
            loader::State::Ready(pokemon) => scrollable(
                column![
                    header(pokemon, &self.artwork),
                    measures(pokemon),
                    abilities(pokemon),
                    stats(pokemon),
                    move_list(pokemon),
                    navigation(pokemon.id),
                ]
                .spacing(30)
                .padding(20),
            )
            .width(Fill)
            .height(Fill)
            .into(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| {
            use keyboard::key::{Key, Named};

            Some(match key.as_ref() {
                Key::Named(Named::ArrowLeft) if modifiers.is_empty() => Message::Previous,
                Key::Named(Named::ArrowRight) if modifiers.is_empty() => Message::Next,
                Key::Named(Named::Escape) => Message::Back,
                _ => None?,
            })
        })
    }

    pub fn teardown(&mut self) {
        self.loader.cancel();
        self.task = None;
    }

    fn current(&self) -> Option<pokemon::Id> {
        self.loader.state().pokemon().map(|pokemon| pokemon.id)
    }
}

fn header<'a>(pokemon: &'a Pokemon, artwork: &'a Artwork) -> Element<'a, Message> {
    let background = widget::color(pokemon.types.color());

    let picture: Element<_> = match artwork {
        Artwork::Loaded(handle) => image(handle)
            .width(240)
            .height(240)
            .content_fit(ContentFit::Contain)
            .into(),
        Artwork::Loading | Artwork::Errored => {
            center(pokeball(120, Some(Color::WHITE))).width(240).height(240).into()
        }
    };

    let types = row(pokemon
        .types
        .iter()
        .map(|kind| badge(kind.label(), widget::color(kind.color()))))
    .spacing(5);

    container(
        row![
            picture,
            column![
                text(pokemon.number()).size(18).color(Color::WHITE),
                text(pokemon.display_name()).size(40).color(Color::WHITE),
                text(pokemon.types.label()).size(16).color(Color::WHITE),
                types,
            ]
            .spacing(10),
        ]
        .spacing(30)
        .align_y(Center),
    )
    .padding(20)
    .width(Fill)
    .style(move |_theme| {
        container::Style::default()
            .background(background)
            .border(border::rounded(30))
    })
    .into()
}

fn measures(pokemon: &Pokemon) -> Element<'_, Message> {
    let measure = |label: &'static str, value: String| {
        column![text(label).size(12), text(value).size(20)]
            .spacing(5)
            .align_x(Center)
    };

    row![
        measure("Height", format!("{:.1} m", pokemon.height_in_meters())),
        measure("Weight", format!("{:.1} kg", pokemon.weight_in_kilograms())),
        measure(
            "Base experience",
            pokemon
                .base_experience
                .map(|experience| experience.to_string())
                .unwrap_or_else(|| String::from("Unknown")),
        ),
    ]
    .spacing(40)
    .into()
}

fn abilities(pokemon: &Pokemon) -> Element<'_, Message> {
    section(
        "Abilities",
        row(pokemon.abilities.iter().map(|ability| {
            let label = if ability.is_hidden {
                format!("{} (hidden)", ability.label())
            } else {
                ability.label()
            };

            text(label).size(16).into()
        }))
        .spacing(20)
        .wrap(),
    )
}

fn stats(pokemon: &Pokemon) -> Element<'_, Message> {
    section(
        "Base stats",
        column(pokemon.stats.iter().map(stat_bar)).spacing(8),
    )
}

fn move_list(pokemon: &Pokemon) -> Element<'_, Message> {
    let background = widget::color(pokemon.types.color());

    section(
        "Moves",
        row(moves::badges(&pokemon.moves).into_iter().map(|move_| {
            let background = match move_ {
                Badge::Move(_) => background,
                Badge::Overflow(_) => background.scale_alpha(0.5),
            };

            badge(move_.to_string(), background)
        }))
        .spacing(5)
        .wrap(),
    )
}

fn navigation<'a>(id: pokemon::Id) -> Element<'a, Message> {
    let previous = catalog::previous(id).map(|previous| {
        button(text!("← #{previous:03}"))
            .on_press(Message::Previous)
            .padding([10, 20])
    });

    let next = catalog::next(id).map(|next| {
        button(text!("#{next:03} →"))
            .on_press(Message::Next)
            .padding([10, 20])
    });

    row![button("Go back").on_press(Message::Back).padding([10, 20])]
        .push(horizontal_space())
        .push_maybe(previous)
        .push_maybe(next)
        .spacing(10)
        .into()
}

fn section<'a>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    column![text(title).size(22), content.into()]
        .spacing(10)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::screen::stub::{Stub, settle};

    use bytes::Bytes;

    async fn detail(id: u32) -> Detail {
        let stub = Stub::default();
        let session = Session::default();
        let identifier = Identifier::from(pokemon::Id::new(id));

        let (mut detail, _task) = Detail::new(identifier.clone(), &stub);

        for update in settle(detail.loader.load(&stub, &identifier.to_string())).await {
            let _ = detail.update(Message::Loaded(update), &session);
        }

        assert_eq!(detail.current(), Some(pokemon::Id::new(id)));

        detail
    }

    fn replacement(action: Action<Message>) -> Option<Route> {
        match action {
            Action::Replace(route) => Some(route),
            Action::None => None,
            Action::Run(_) | Action::Navigate(_) | Action::Back => panic!("unexpected action"),
        }
    }

    fn route(id: u32) -> Route {
        Route::Detail(Identifier::Number(pokemon::Id::new(id)))
    }

    #[tokio::test]
    async fn first_entry_has_no_previous() {
        let session = Session::default();
        let mut detail = detail(1).await;

        assert_eq!(replacement(detail.update(Message::Previous, &session)), None);
        assert_eq!(
            replacement(detail.update(Message::Next, &session)),
            Some(route(2))
        );
    }

    #[tokio::test]
    async fn last_entry_has_no_next() {
        let session = Session::default();
        let mut detail = detail(catalog::SIZE).await;

        assert_eq!(replacement(detail.update(Message::Next, &session)), None);
        assert_eq!(
            replacement(detail.update(Message::Previous, &session)),
            Some(route(catalog::SIZE - 1))
        );
    }

    #[tokio::test]
    async fn neighbours_replace_the_current_screen() {
        let session = Session::default();
        let mut detail = detail(25).await;

        assert_eq!(
            replacement(detail.update(Message::Previous, &session)),
            Some(route(24))
        );
        assert_eq!(
            replacement(detail.update(Message::Next, &session)),
            Some(route(26))
        );
        assert!(matches!(
            detail.update(Message::Back, &session),
            Action::Back
        ));
    }

    #[tokio::test]
    async fn artwork_of_another_record_is_ignored() {
        let session = Session::default();
        let mut detail = detail(25).await;

        let image = || artwork::Image {
            width: 1,
            height: 1,
            rgba: Bytes::from_static(&[0, 0, 0, 255]),
        };

        let _ = detail.update(
            Message::ArtworkFetched(pokemon::Id::new(26), Ok(image())),
            &session,
        );
        assert!(matches!(detail.artwork, Artwork::Loading));

        let _ = detail.update(
            Message::ArtworkFetched(pokemon::Id::new(25), Ok(image())),
            &session,
        );
        assert!(matches!(detail.artwork, Artwork::Loaded(_)));
    }

    #[tokio::test]
    async fn pending_detail_does_not_navigate() {
        let session = Session::default();
        let (mut detail, _task) =
            Detail::new(Identifier::from(pokemon::Id::new(25)), &Stub::default());

        assert_eq!(replacement(detail.update(Message::Previous, &session)), None);
        assert_eq!(replacement(detail.update(Message::Next, &session)), None);
    }
}
