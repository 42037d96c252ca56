use std::cell::Cell;
use std::rc::Rc;

use crate::animation::clock::FrameClock;
use crate::animation::reveal::{Reveal, RevealItemState, RevealPreset, TriggerEvent};
use crate::animation::timeline::{TickReport, Timeline};
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{PrismaError, PrismaResult};
use crate::interaction::cursor::{CursorFollower, CursorParams, CursorState};
use crate::interaction::host::HostCapabilities;
use crate::interaction::pointer::{PointerState, PointerTracker};
use crate::interaction::regions::RegionRegistry;
use crate::site::route::Route;
use crate::visuals::frame::{Visual, VisualFrame};
use crate::visuals::geometric_prism::{GeometricPrism, GeometricPrismConfig};
use crate::visuals::loader::{LoaderConfig, LoaderPhase, LoadingScreen};
use crate::visuals::logo::{LogoConfig, PrismaLogo};

/// Logo size in the navigation bar.
pub const NAV_LOGO_SIZE: f64 = 32.0;
/// Hero prism size on the home page.
pub const HOME_PRISM_SIZE: f64 = 450.0;

/// Everything mounted for the active route. Dropping it releases every page channel.
struct Page {
    route: Route,
    transition: Reveal,
    reveals: Vec<(&'static str, Reveal)>,
    visuals: Vec<Box<dyn Visual>>,
}

/// The whole site's animation state: one timeline driven by host frames, plus the
/// components that live across pages and the active page.
pub struct Stage {
    timeline: Timeline,
    clock: FrameClock,
    host: HostCapabilities,
    pointer: PointerTracker,
    regions: RegionRegistry,
    cursor: CursorFollower,
    nav_logo: PrismaLogo,
    loader: Option<LoadingScreen>,
    content_visible: Rc<Cell<bool>>,
    page: Option<Page>,
}

impl Stage {
    /// Mount the persistent chrome and the loader, then the first page.
    #[tracing::instrument]
    pub fn boot(host: HostCapabilities, route: Route) -> PrismaResult<Self> {
        let mut timeline = Timeline::new();
        let content_visible = Rc::new(Cell::new(false));

        let nav_logo = PrismaLogo::mount(
            LogoConfig {
                size: NAV_LOGO_SIZE,
                animated: false,
            },
            &mut timeline,
            &host,
        )?;
        let visible = Rc::clone(&content_visible);
        let loader = LoadingScreen::mount(LoaderConfig::default(), &mut timeline, &host, move || {
            visible.set(true)
        })?;

        let mut stage = Self {
            timeline,
            clock: FrameClock::new(),
            cursor: CursorFollower::new(CursorParams::default(), &host),
            host,
            pointer: PointerTracker::default(),
            regions: RegionRegistry::new(),
            nav_logo,
            loader: (loader.phase() != LoaderPhase::Done).then_some(loader),
            content_visible,
            page: None,
        };
        stage.navigate(route)?;
        Ok(stage)
    }

    /// Tear down the active page and mount `route`.
    #[tracing::instrument(skip(self), fields(from = ?self.route()))]
    pub fn navigate(&mut self, route: Route) -> PrismaResult<()> {
        self.page = None;
        let released = self.timeline.sweep();
        tracing::debug!(released, "previous page released");

        let reduced = !self.host.allows_motion();
        let timeline = &mut self.timeline;
        let transition = Reveal::mount("page", RevealPreset::PAGE_TRANSITION, 1, reduced, timeline)?;
        let reveals = route
            .reveals()
            .iter()
            .map(|s| Ok((s.name, Reveal::mount(s.name, s.preset, s.items, reduced, timeline)?)))
            .collect::<PrismaResult<Vec<_>>>()?;

        let mut visuals: Vec<Box<dyn Visual>> = Vec::new();
        if route == Route::Home {
            let config = GeometricPrismConfig {
                size: HOME_PRISM_SIZE,
                ..GeometricPrismConfig::default()
            };
            visuals.push(Box::new(GeometricPrism::mount(config, timeline, &self.host)?));
        }

        self.page = Some(Page {
            route,
            transition,
            reveals,
            visuals,
        });
        Ok(())
    }

    /// Navigate by path.
    pub fn navigate_path(&mut self, path: &str) -> PrismaResult<()> {
        self.navigate(Route::parse(path)?)
    }

    /// Advance to the host frame timestamp `now_ms`.
    pub fn frame(&mut self, now_ms: f64) -> TickReport {
        let dt = self.clock.advance(now_ms);
        let report = self.timeline.tick(dt);
        self.cursor.sync_regions(&self.regions);
        if self
            .loader
            .as_ref()
            .is_some_and(|l| l.phase() == LoaderPhase::Done)
        {
            tracing::debug!("loader unmounted");
            self.loader = None;
        }
        report
    }

    /// Document-level pointer move.
    pub fn pointer_move(&mut self, client: Point) -> PrismaResult<()> {
        self.pointer.moved(client);
        self.cursor
            .pointer_move(client, &self.regions, &mut self.timeline)
    }

    /// Pointer left the document.
    pub fn pointer_leave_document(&mut self) {
        self.pointer.left_document();
        self.cursor.pointer_leave_document();
    }

    /// Pointer entered the document.
    pub fn pointer_enter_document(&mut self) {
        self.pointer.entered_document();
        self.cursor.pointer_enter_document();
    }

    /// Pointer moved over page visual `index`, whose box is `bounds`.
    pub fn pointer_over_visual(&mut self, index: usize, client: Point, bounds: Rect) -> PrismaResult<()> {
        let mut pointer = PointerState::default();
        pointer.move_to(client, bounds)?;
        self.visual_mut(index)?.pointer_move(pointer);
        Ok(())
    }

    /// Pointer left page visual `index`.
    pub fn pointer_leave_visual(&mut self, index: usize) -> PrismaResult<()> {
        let page = self
            .page
            .as_mut()
            .ok_or_else(|| PrismaError::validation("no page mounted"))?;
        let visual = page
            .visuals
            .get_mut(index)
            .ok_or_else(|| PrismaError::validation(format!("no visual at index {index}")))?;
        visual.pointer_leave(&mut self.timeline)
    }

    fn visual_mut(&mut self, index: usize) -> PrismaResult<&mut Box<dyn Visual>> {
        self.page
            .as_mut()
            .and_then(|p| p.visuals.get_mut(index))
            .ok_or_else(|| PrismaError::validation(format!("no visual at index {index}")))
    }

    /// Feed the scroll position of a reveal section's trigger element.
    pub fn scroll_section(
        &mut self,
        name: &str,
        element_top: f64,
        viewport_height: f64,
    ) -> PrismaResult<Option<TriggerEvent>> {
        let page = self
            .page
            .as_mut()
            .ok_or_else(|| PrismaError::validation("no page mounted"))?;
        let reveal = page
            .reveals
            .iter_mut()
            .find(|(n, _)| *n == name)
            .map(|(_, r)| r)
            .ok_or_else(|| PrismaError::validation(format!("unknown section '{name}'")))?;
        reveal.on_scroll(element_top, viewport_height, &mut self.timeline)
    }

    /// Active route.
    pub fn route(&self) -> Option<Route> {
        self.page.as_ref().map(|p| p.route)
    }

    /// Host capabilities.
    pub fn host(&self) -> HostCapabilities {
        self.host
    }

    /// `true` once the loader has finished (or was skipped).
    pub fn content_visible(&self) -> bool {
        self.content_visible.get()
    }

    /// The loader while it is on screen.
    pub fn loader(&self) -> Option<&LoadingScreen> {
        self.loader.as_ref()
    }

    /// Navigation logo.
    pub fn nav_logo(&self) -> &PrismaLogo {
        &self.nav_logo
    }

    /// Cursor snapshot.
    pub fn cursor(&self) -> CursorState {
        self.cursor.state()
    }

    /// Interactive regions, updated by the presentation layer.
    pub fn regions_mut(&mut self) -> &mut RegionRegistry {
        &mut self.regions
    }

    /// Shared pointer position.
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Page container style from the route transition.
    pub fn page_transition(&self) -> Option<RevealItemState> {
        self.page.as_ref().map(|p| p.transition.item(0))
    }

    /// Item style in a reveal section.
    pub fn section_item(&self, name: &str, index: usize) -> Option<RevealItemState> {
        let page = self.page.as_ref()?;
        let (_, reveal) = page.reveals.iter().find(|(n, _)| *n == name)?;
        (index < reveal.len()).then(|| reveal.item(index))
    }

    /// Frames of the page visuals.
    pub fn visual_frames(&self) -> Vec<VisualFrame> {
        self.page
            .as_ref()
            .map(|p| p.visuals.iter().map(|v| v.frame()).collect())
            .unwrap_or_default()
    }

    /// Channels currently scheduled.
    pub fn live_channels(&self) -> usize {
        self.timeline.live_channels()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/stage.rs"]
mod tests;
