use crate::config::ResolverConfig;

use super::{
    BackgroundMedia, BackgroundPaint, BlurHashDecoder, MediaError, MediaFetcher, MediaKind,
    PlaceholderDecoder, PlaceholderError, PlaceholderImage, ResolvedBackground,
};

/// Resolves a [`BackgroundMedia`] into something paintable.
///
/// Ladder for images:
/// 1. fetch `url` and check the bytes decode as an image → the URL itself
/// 2. decode the placeholder → inline PNG
/// 3. the fixed fallback gradient
///
/// An empty URL starts at step 3, and videos always land there. The resolver
/// never fails; every problem is logged and absorbed.
#[derive(Debug, Clone)]
pub struct MediaResolver<F, D = BlurHashDecoder> {
    fetcher: F,
    decoder: D,
    config: ResolverConfig,
}

impl<F: MediaFetcher> MediaResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher, decoder: BlurHashDecoder, config: ResolverConfig::default() }
    }
}

impl<F: MediaFetcher, D: PlaceholderDecoder> MediaResolver<F, D> {
    /// Swaps the placeholder decoder.
    pub fn with_decoder<D2: PlaceholderDecoder>(self, decoder: D2) -> MediaResolver<F, D2> {
        MediaResolver { fetcher: self.fetcher, decoder, config: self.config }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Runs the fallback ladder for `media`. Always returns a ready value.
    pub async fn resolve(&self, media: &BackgroundMedia) -> ResolvedBackground {
        let paint = match media.kind {
            MediaKind::Video => {
                log::debug!("video background {:?} is not decoded, using fallback", media.url);
                self.fallback()
            }
            MediaKind::Image if media.url.is_empty() => self.fallback(),
            MediaKind::Image => self.resolve_image(media).await,
        };
        ResolvedBackground::ready(paint)
    }

    async fn resolve_image(&self, media: &BackgroundMedia) -> BackgroundPaint {
        match self.load(&media.url).await {
            Ok(()) => return BackgroundPaint::Url(media.url.clone()),
            Err(e) => log::warn!("background image unavailable: {e}"),
        }

        let Some(code) = media.placeholder.as_deref() else {
            return self.fallback();
        };
        match self.decode_placeholder(code) {
            Ok(image) => {
                log::debug!("using {}x{} placeholder for {}", image.width, image.height, media.url);
                BackgroundPaint::Placeholder(image)
            }
            Err(e) => {
                log::warn!("placeholder for {} unusable: {e}", media.url);
                self.fallback()
            }
        }
    }

    async fn load(&self, url: &str) -> Result<(), MediaError> {
        let bytes = self.fetcher.fetch(url).await?;
        image::load_from_memory(&bytes).map_err(|e| MediaError::decode(url, e))?;
        Ok(())
    }

    fn decode_placeholder(&self, code: &str) -> Result<PlaceholderImage, PlaceholderError> {
        let cfg = &self.config;
        let raster = self
            .decoder
            .decode(code, cfg.placeholder_width, cfg.placeholder_height, cfg.punch)?;
        Ok(PlaceholderImage {
            width: raster.width,
            height: raster.height,
            data_url: raster.to_data_url()?,
        })
    }

    fn fallback(&self) -> BackgroundPaint {
        BackgroundPaint::Gradient(self.config.fallback)
    }
}
