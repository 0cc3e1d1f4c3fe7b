use crate::pokeapi;
use crate::pokeapi::stat::Stat;

use iced::border;
use iced::widget::{canvas, container, horizontal_space, row, text};
use iced::{Center, Color, Element, Fill, Length, Pixels};

pub fn logo<'a, Message>(size: impl Into<Pixels>) -> Element<'a, Message> {
    text("Pokédex").size(size).into()
}

pub fn color(color: pokeapi::Color) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

pub fn badge<'a, Message: 'a>(label: String, background: Color) -> Element<'a, Message> {
    container(text(label).size(12).color(Color::WHITE))
        .padding([4, 10])
        .style(move |_theme| {
            container::Style::default()
                .background(background)
                .border(border::rounded(12))
        })
        .into()
}

pub fn stat_bar<'a, Message: 'a>(stat: &Stat) -> Element<'a, Message> {
    let fill = color(stat.tier().color());

    // Portions of a thousand; both halves need a non-zero share
    let filled = ((stat.percentage() * 10.0).round() as u16).clamp(1, 999);

    let bar = container(row![
        container(horizontal_space())
            .width(Length::FillPortion(filled))
            .height(10)
            .style(move |_theme| {
                container::Style::default()
                    .background(fill)
                    .border(border::rounded(5))
            }),
        container(horizontal_space())
            .width(Length::FillPortion(1000 - filled))
            .height(10),
    ])
    .width(Fill)
    .style(|_theme| {
        container::Style::default()
            .background(Color::BLACK.scale_alpha(0.3))
            .border(border::rounded(5))
    });

    row![
        text(stat.label()).size(14).width(80),
        text(stat.value.to_string()).size(14).width(40),
        bar,
    ]
    .spacing(10)
    .align_y(Center)
    .into()
}

pub fn pokeball<'a, Message: 'a>(
    size: impl Into<Pixels>,
    tint: Option<Color>,
) -> Element<'a, Message> {
    use iced::mouse;
    use iced::{Point, Rectangle, Renderer, Size, Theme};

    struct Pokeball {
        tint: Option<Color>,
    }

    impl<Message> canvas::Program<Message> for Pokeball {
        type State = canvas::Cache;

        fn draw(
            &self,
            cache: &Self::State,
            renderer: &Renderer,
            theme: &Theme,
            bounds: Rectangle,
            _cursor: mouse::Cursor,
        ) -> Vec<canvas::Geometry> {
            let pokeball = cache.draw(renderer, bounds.size(), |frame| {
                const RADIUS: f32 = 100.0;
                const LINE: f32 = 30.0;

                let palette = theme.palette();
                let shell = self.tint.unwrap_or(palette.text);

                let center = Point::new(RADIUS, RADIUS);
                let outer_circle = canvas::Path::circle(center, RADIUS);
                let inner_circle = canvas::Path::circle(center, RADIUS / 2.0);
                let button = canvas::Path::circle(center, RADIUS / 4.0);

                let line = Rectangle::new(
                    Point::new(0.0, RADIUS - LINE / 2.0),
                    Size::new(2.0 * RADIUS, LINE),
                );

                let scale = (bounds.width - 0.5) / (2.0 * RADIUS);

                frame.scale(scale);

                frame.fill(&outer_circle, shell);
                frame.fill(&inner_circle, palette.background);
                frame.fill_rectangle(line.position(), line.size(), palette.background);
                frame.fill(&button, shell);
            });

            vec![pokeball]
        }
    }

    let size = size.into();

    canvas(Pokeball { tint }).width(size).height(size).into()
}
