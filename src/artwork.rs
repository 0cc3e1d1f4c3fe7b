use crate::pokeapi::Session;
use crate::pokeapi::pokemon::{Artwork, Pokemon};

use bytes::Bytes;
use std::fmt;
use std::io;
use std::sync::Arc;
use tokio::task;

#[derive(Clone)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub rgba: Bytes,
}

impl Image {
    pub fn fetch<'a>(
        pokemon: &Arc<Pokemon>,
        session: &Session,
    ) -> impl Future<Output = Result<Image, anywho::Error>> + 'a {
        let pokemon = pokemon.clone();
        let session = session.clone();

        async move {
            let artwork = Artwork::download(&pokemon, &session).await?;

            // Decode image as RGBA in a background blocking thread
            task::spawn_blocking(move || {
                let image = image::ImageReader::new(io::Cursor::new(artwork.bytes))
                    .with_guessed_format()?
                    .decode()?
                    .to_rgba8();

                Ok(Image {
                    width: image.width(),
                    height: image.height(),
                    rgba: Bytes::from(image.into_raw()),
                })
            })
            .await?
        }
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba", &self.rgba.len())
            .finish()
    }
}
