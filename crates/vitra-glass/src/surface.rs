//! Stateful shell around the resolver and the compositor.
//!
//! A [`GlassSurface`] owns the current background descriptor and uniforms.
//! Every resolution attempt is tagged with a [`ResolveTicket`]; a result is
//! only committed while its ticket still names the current descriptor, so a
//! slow load for an old image can never overwrite a newer one or signal
//! readiness for it.

use std::fmt;

use vitra_engine::coords::{Vec2, Viewport};
use vitra_engine::scene::DrawList;

use crate::compositor;
use crate::config::SurfaceConfig;
use crate::css::{self, SurfaceCss};
use crate::media::{
    BackgroundMedia, BackgroundPaint, MediaFetcher, MediaResolver, PlaceholderDecoder,
    ResolvedBackground,
};
use crate::painter::Painter;
use crate::style::DerivedStyle;
use crate::uniforms::UniformSet;

/// Tag of one resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveTicket {
    pub generation: u64,
    pub media: BackgroundMedia,
}

/// Readiness of the current descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle {
    /// An attempt is outstanding. `previous` is the last committed paint, kept on screen.
    Unresolved { previous: BackgroundPaint },
    Resolved(ResolvedBackground),
}

pub struct GlassSurface {
    media: BackgroundMedia,
    generation: u64,
    lifecycle: Lifecycle,
    uniforms: UniformSet,
    config: SurfaceConfig,
    on_ready: Option<Box<dyn FnMut()>>,
}

impl GlassSurface {
    pub fn new(media: BackgroundMedia, uniforms: UniformSet) -> Self {
        Self {
            media,
            generation: 0,
            lifecycle: Lifecycle::Unresolved { previous: BackgroundPaint::Empty },
            uniforms,
            config: SurfaceConfig::default(),
            on_ready: None,
        }
    }

    pub fn with_config(mut self, config: SurfaceConfig) -> Self {
        self.config = config;
        self
    }

    /// Called with no arguments each time an attempt for the current descriptor commits.
    pub fn on_ready(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_ready = Some(Box::new(callback));
        self
    }

    // ── background ────────────────────────────────────────────────────────

    pub fn media(&self) -> &BackgroundMedia {
        &self.media
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Ticket for the current descriptor.
    pub fn ticket(&self) -> ResolveTicket {
        ResolveTicket { generation: self.generation, media: self.media.clone() }
    }

    /// Replaces the descriptor.
    ///
    /// Returns the ticket of the attempt to start, or `None` when the
    /// identity did not change and nothing needs resolving.
    pub fn set_background(&mut self, media: BackgroundMedia) -> Option<ResolveTicket> {
        if media == self.media {
            return None;
        }

        let previous = match &self.lifecycle {
            Lifecycle::Unresolved { previous } => previous.clone(),
            Lifecycle::Resolved(bg) => bg.paint.clone(),
        };
        self.media = media;
        self.generation += 1;
        self.lifecycle = Lifecycle::Unresolved { previous };
        log::debug!("background changed to {:?} (attempt {})", self.media.url, self.generation);
        Some(self.ticket())
    }

    /// Commits the result of the attempt `ticket` started.
    ///
    /// Stale or repeated commits are dropped and return `false`; an accepted
    /// ready result fires `on_ready`.
    pub fn commit(&mut self, ticket: &ResolveTicket, resolved: ResolvedBackground) -> bool {
        if ticket.generation != self.generation || ticket.media != self.media {
            log::debug!(
                "discarding stale background for {:?} (attempt {}, current {})",
                ticket.media.url,
                ticket.generation,
                self.generation
            );
            return false;
        }
        if matches!(self.lifecycle, Lifecycle::Resolved(_)) {
            log::debug!("attempt {} already committed", ticket.generation);
            return false;
        }

        let ready = resolved.ready;
        self.lifecycle = Lifecycle::Resolved(resolved);
        if ready {
            if let Some(callback) = self.on_ready.as_mut() {
                callback();
            }
        }
        true
    }

    /// Resolves the current descriptor and commits the result.
    pub async fn resolve_with<F, D>(&mut self, resolver: &MediaResolver<F, D>) -> bool
    where
        F: MediaFetcher,
        D: PlaceholderDecoder,
    {
        let ticket = self.ticket();
        let resolved = resolver.resolve(&ticket.media).await;
        self.commit(&ticket, resolved)
    }

    pub fn is_ready(&self) -> bool {
        matches!(&self.lifecycle, Lifecycle::Resolved(bg) if bg.ready)
    }

    /// What the background layers show right now.
    pub fn background(&self) -> ResolvedBackground {
        match &self.lifecycle {
            Lifecycle::Unresolved { previous } => {
                ResolvedBackground { paint: previous.clone(), ready: false }
            }
            Lifecycle::Resolved(bg) => bg.clone(),
        }
    }

    // ── uniforms ──────────────────────────────────────────────────────────

    pub fn uniforms(&self) -> &UniformSet {
        &self.uniforms
    }

    pub fn set_uniforms(&mut self, uniforms: UniformSet) {
        self.uniforms = uniforms;
    }

    /// Re-anchors the panel at the pointer.
    pub fn move_to(&mut self, pos: Vec2) {
        self.uniforms.geometry.x = pos.x;
        self.uniforms.geometry.y = pos.y;
    }

    // ── output ────────────────────────────────────────────────────────────

    pub fn style(&self) -> DerivedStyle {
        compositor::derive(&self.uniforms, &self.background())
    }

    /// Badge text, shown only once the background is ready.
    pub fn fallback_badge(&self) -> Option<&str> {
        if !self.is_ready() {
            return None;
        }
        self.config.fallback_badge.as_deref()
    }

    pub fn css(&self) -> SurfaceCss {
        css::render(&self.style(), self.fallback_badge())
    }

    pub fn paint(&self, draw_list: &mut DrawList, viewport: Viewport) {
        Painter::new(draw_list).paint(&self.style(), viewport);
    }
}

impl fmt::Debug for GlassSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlassSurface")
            .field("media", &self.media)
            .field("generation", &self.generation)
            .field("lifecycle", &self.lifecycle)
            .field("uniforms", &self.uniforms)
            .field("config", &self.config)
            .field("on_ready", &self.on_ready.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::media::{FallbackGradient, MediaError};

    /// Fails every request.
    struct Offline;

    impl MediaFetcher for Offline {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, MediaError> {
            Err(MediaError::fetch(url, "offline"))
        }
    }

    fn counted(media: BackgroundMedia) -> (GlassSurface, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let surface = GlassSurface::new(media, UniformSet::default())
            .on_ready(move || seen.set(seen.get() + 1));
        (surface, count)
    }

    fn gradient() -> ResolvedBackground {
        ResolvedBackground::ready(BackgroundPaint::Gradient(FallbackGradient::default()))
    }

    #[tokio::test]
    async fn empty_url_resolves_to_gradient_and_signals_once() {
        let (mut surface, count) = counted(BackgroundMedia::none());
        assert!(!surface.is_ready());

        assert!(surface.resolve_with(&MediaResolver::new(Offline)).await);
        assert!(surface.is_ready());
        assert_eq!(surface.background(), gradient());
        assert_eq!(count.get(), 1);
    }

    #[tokio::test]
    async fn failed_image_without_placeholder_falls_back() {
        let (mut surface, count) = counted(BackgroundMedia::image("https://example.com/a.jpg"));
        surface.resolve_with(&MediaResolver::new(Offline)).await;
        assert!(surface.background().is_fallback());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn stale_attempt_is_discarded_without_signal() {
        let (mut surface, count) = counted(BackgroundMedia::image("a.png"));
        let first = surface.ticket();
        let second = surface.set_background(BackgroundMedia::image("b.png")).expect("new identity");

        assert!(!surface.commit(&first, ResolvedBackground::ready(BackgroundPaint::Url("a.png".into()))));
        assert_eq!(count.get(), 0);
        assert!(!surface.is_ready());

        assert!(surface.commit(&second, ResolvedBackground::ready(BackgroundPaint::Url("b.png".into()))));
        assert_eq!(surface.background().paint, BackgroundPaint::Url("b.png".into()));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn switching_back_does_not_revive_old_tickets() {
        let (mut surface, count) = counted(BackgroundMedia::image("a.png"));
        let first = surface.ticket();
        surface.set_background(BackgroundMedia::image("b.png"));
        surface.set_background(BackgroundMedia::image("a.png"));

        assert!(!surface.commit(&first, gradient()));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn duplicate_commit_signals_once() {
        let (mut surface, count) = counted(BackgroundMedia::none());
        let ticket = surface.ticket();
        assert!(surface.commit(&ticket, gradient()));
        assert!(!surface.commit(&ticket, gradient()));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unchanged_identity_needs_no_attempt() {
        let media = BackgroundMedia::image("a.png").with_placeholder("00TI:j");
        let mut surface = GlassSurface::new(media.clone(), UniformSet::default());
        assert!(surface.set_background(media.clone()).is_none());

        let other = media.with_placeholder("005?}k");
        assert!(surface.set_background(other).is_some());
    }

    #[test]
    fn previous_paint_stays_while_unresolved() {
        let mut surface = GlassSurface::new(BackgroundMedia::none(), UniformSet::default());
        let ticket = surface.ticket();
        surface.commit(&ticket, gradient());

        surface.set_background(BackgroundMedia::image("b.png"));
        let bg = surface.background();
        assert!(!bg.ready);
        assert!(bg.is_fallback());
        assert!(surface.fallback_badge().is_none());
    }

    #[test]
    fn badge_appears_once_ready() {
        let mut surface = GlassSurface::new(BackgroundMedia::none(), UniformSet::default());
        assert_eq!(surface.fallback_badge(), None);
        let ticket = surface.ticket();
        surface.commit(&ticket, gradient());
        assert_eq!(surface.fallback_badge(), Some("CSS Fallback Mode"));
        assert!(surface.css().badge.is_some());

        let hidden = GlassSurface::new(BackgroundMedia::none(), UniformSet::default())
            .with_config(SurfaceConfig::default().without_badge());
        assert_eq!(hidden.fallback_badge(), None);
    }

    #[test]
    fn uniform_changes_restyle_without_touching_background() {
        let mut surface = GlassSurface::new(BackgroundMedia::none(), UniformSet::default());
        surface.move_to(Vec2::new(100.0, 50.0));
        let panel = surface.style().panel;
        assert_eq!(panel.top_left(), Vec2::new(-50.0, -50.0));
        assert!(matches!(surface.lifecycle(), Lifecycle::Unresolved { .. }));

        let mut u = surface.uniforms().clone();
        u.content.text = "x".into();
        surface.set_uniforms(u);
        assert_eq!(surface.style().label.text, "x");
    }

    #[test]
    fn paint_records_the_surface() {
        let mut surface = GlassSurface::new(BackgroundMedia::none(), UniformSet::default());
        let ticket = surface.ticket();
        surface.commit(&ticket, gradient());

        let mut list = DrawList::new();
        surface.paint(&mut list, Viewport::new(800.0, 600.0));
        assert_eq!(list.items()[0].cmd.kind(), "rect");
        assert!(!list.is_empty());
    }
}
