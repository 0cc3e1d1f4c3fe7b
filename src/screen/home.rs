use crate::artwork;
use crate::pokeapi::loader::{self, Loader};
use crate::pokeapi::{Identifier, Pokemon, Session, catalog, pokemon};
use crate::screen::{Action, Route};
use crate::widget::{self, logo, pokeball};

use function::Binary;
use iced::border;
use iced::task;
use iced::widget::{
    bottom_right, button, center, column, container, grid, image, pop, row, scrollable, text,
    text_input,
};
use iced::{Center, Color, ContentFit, Element, Fill, Task, Theme};

use std::collections::HashMap;

pub struct Home {
    query: String,
    cells: HashMap<pokemon::Id, Cell>,
}

struct Cell {
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
    QueryChanged(String),
    Search,
    CellShown(pokemon::Id),
    Loaded(pokemon::Id, loader::Update),
    ArtworkFetched(pokemon::Id, Result<artwork::Image, anywho::Error>),
    Open(pokemon::Id),
}

impl Home {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            cells: HashMap::new(),
        }
    }

    pub fn update(&mut self, message: Message, session: &Session) -> Action<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;

                Action::None
            }
            Message::Search => Action::Navigate(Route::Search(self.query.to_lowercase())),
            Message::CellShown(id) => {
                if self.cells.contains_key(&id) {
                    return Action::None;
                }

                let mut loader = Loader::new();

                let (load, handle) =
                    Task::run(loader.load(session, &id.to_string()), Message::Loaded.with(id))
                        .abortable();

                let _ = self.cells.insert(
                    id,
                    Cell {
                        loader,
                        artwork: Artwork::Loading,
                        task: Some(handle.abort_on_drop()),
                    },
                );

                Action::Run(load)
            }
            Message::Loaded(id, update) => {
                let Some(cell) = self.cells.get_mut(&id) else {
                    return Action::None;
                };

                if !cell.loader.apply(update) {
                    return Action::None;
                }

                match cell.loader.state() {
                    loader::State::Pending => Action::None,
                    loader::State::Ready(pokemon) => {
                        cell.task = None;

                        Action::Run(Task::perform(
                            artwork::Image::fetch(pokemon, session),
                            Message::ArtworkFetched.with(id),
                        ))
                    }
                    loader::State::Failed(_) => {
                        cell.task = None;

                        Action::None
                    }
                }
            }
            Message::ArtworkFetched(id, Ok(image)) => {
                if let Some(cell) = self.cells.get_mut(&id) {
                    cell.artwork = Artwork::Loaded(image::Handle::from_rgba(
                        image.width,
                        image.height,
                        image.rgba,
                    ));
                }

                Action::None
            }
            Message::ArtworkFetched(id, Err(error)) => {
                log::error!("{error}");

                if let Some(cell) = self.cells.get_mut(&id) {
                    cell.artwork = Artwork::Errored;
                }

                Action::None
            }
            Message::Open(id) => Action::Navigate(Route::Detail(Identifier::from(id))),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let search = row![
            text_input("Search by name or number", &self.query)
                .on_input(Message::QueryChanged)
                .on_submit(Message::Search)
                .padding(10),
            button("Search")
                .on_press(Message::Search)
                .padding([10, 20]),
        ]
        .spacing(10);

        let cells = self.entries().map(|(id, cell)| match cell {
            Some(cell) => match cell.loader.state().pokemon() {
                Some(pokemon) => summary(pokemon, &cell.artwork),
                None => placeholder(id),
            },
            None => placeholder(id),
        });

        let grid = scrollable(
            grid(cells)
                .fluid(220)
                .height(grid::aspect_ratio(3, 4))
                .spacing(10),
        )
        .width(Fill)
        .height(Fill)
        .spacing(10);

        column![logo(40), search, grid]
            .spacing(20)
            .padding(20)
            .align_x(Center)
            .into()
    }

    /// Catalog entries still on the grid. Failed cells collapse.
    fn entries(&self) -> impl Iterator<Item = (pokemon::Id, Option<&Cell>)> {
        catalog::ids().filter_map(|id| match self.cells.get(&id) {
            Some(cell) if matches!(cell.loader.state(), loader::State::Failed(_)) => None,
            cell => Some((id, cell)),
        })
    }

    pub fn teardown(&mut self) {
        for cell in self.cells.values_mut() {
            cell.loader.cancel();
            cell.task = None;
        }
    }
}

impl Default for Home {
    fn default() -> Self {
        Self::new()
    }
}

fn summary<'a>(pokemon: &'a Pokemon, artwork: &'a Artwork) -> Element<'a, Message> {
    let background = widget::color(pokemon.types.color());

    let picture: Element<_> = match artwork {
        Artwork::Loaded(handle) => image(handle)
            .width(Fill)
            .height(Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        Artwork::Loading | Artwork::Errored => center(pokeball(48, Some(Color::WHITE))).into(),
    };

    button(
        container(
            column![
                picture,
                text(pokemon.name.to_uppercase()).size(17),
                text(pokemon.types.label()).size(15).color(Color::WHITE),
            ]
            .spacing(5)
            .align_x(Center),
        )
        .padding(10)
        .width(Fill)
        .height(Fill)
        .style(move |_theme| {
            container::Style::default()
                .background(background)
                .border(border::rounded(30))
        }),
    )
    .on_press(Message::Open(pokemon.id))
    .padding(0)
    .style(button::text)
    .into()
}

fn placeholder<'a>(id: pokemon::Id) -> Element<'a, Message> {
    let slot = container(
        column![
            center(pokeball(32, None)),
            bottom_right(text!("#{id}").style(|theme: &Theme| {
                let palette = theme.extended_palette();

                text::Style {
                    color: Some(palette.background.weak.color),
                }
            }))
            .padding([5, 8]),
        ]
        .height(Fill),
    )
    .style(|theme| container::dark(theme).border(border::rounded(30)));

    pop(slot)
        .on_show(move |_size| Message::CellShown(id))
        .into()
}
