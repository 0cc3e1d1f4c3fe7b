pub use crate::core::pokemon::*;

use crate::{Error, Session};

use bytes::Bytes;
use std::fmt;

#[derive(Clone)]
pub struct Artwork {
    pub bytes: Bytes,
}

impl fmt::Debug for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artwork")
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl Artwork {
    pub async fn download(pokemon: &Pokemon, session: &Session) -> Result<Self, Error> {
        use futures_util::TryFutureExt;

        let download = |url: Option<&str>| {
            let url = url.map(str::to_owned);

            async move {
                let url = url.ok_or(Error::ArtworkUnavailable(pokemon.id))?;

                session.download_image(&url).await
            }
        };

        // Order of image fetching:
        // 1. Official artwork - High resolution, missing for some alternate forms.
        // 2. Front sprite - Tiny, but available for every catalog entry.
        let bytes = download(pokemon.artwork.as_deref())
            .or_else(|error| {
                log::warn!("{error}");

                download(pokemon.sprite.as_deref())
            })
            .await?;

        Ok(Self { bytes })
    }
}
