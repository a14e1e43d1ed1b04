use crate::constants::{DRAG_DELTA_SCALE, SELECTION_QUERY_KEY};
use folio_core::{
    classify_drag, CarouselDriver, ContentIndex, DescriptionCarousel, DragGesture, DragScroll,
    FolioConfig, Gesture, Item, MagazineNav, Orientation, PageBook, ScrollSession, SelectOutcome,
    SkillStack, Viewport,
};
use glam::Vec2;

/// Everything one mounted view owns. Event handlers and the frame loop share
/// it through `Rc<RefCell<_>>` on the single UI thread.
pub struct AppState {
    pub config: FolioConfig,
    pub content: ContentIndex,
    pub stack: SkillStack,
    pub carousel: CarouselDriver,
    pub session: ScrollSession,
    pub magazines: MagazineNav,
    pub book: PageBook,
    /// Description cards of the selected skill, keyed by its id.
    pub descriptions: Option<(String, DescriptionCarousel)>,
    pub drag_scroll: DragScroll,
    pub assets_ready: bool,
}

impl AppState {
    pub fn new(config: FolioConfig, content: ContentIndex, viewport: Viewport) -> Self {
        let sections = content.items();
        // Every skill occupies one slot in the stack regardless of page count.
        let skills: Vec<Item> = sections
            .iter()
            .map(|s| Item::new(s.id.clone(), s.category, 1))
            .collect();
        let magazines = MagazineNav::default();
        Self {
            stack: SkillStack::new(&skills, config, viewport),
            carousel: CarouselDriver::new(sections, config.carousel),
            session: ScrollSession::new(),
            book: PageBook::for_magazine(magazines.current()),
            magazines,
            content,
            config,
            descriptions: None,
            drag_scroll: DragScroll::default(),
            assets_ready: false,
        }
    }

    /// Resolve a loose skill name and select it without echoing to the URL.
    pub fn apply_external_query(&mut self, query: Option<&str>) {
        let Some(query) = query else {
            self.stack.apply_external_selection(None);
            return;
        };
        match self.content.find(query) {
            Ok(section) => {
                let title = section.title.clone();
                if self.stack.apply_external_selection(Some(&title)) == SelectOutcome::Exploded {
                    log::info!("[{}] selected {:?} from {:?}", SELECTION_QUERY_KEY, title, query);
                }
            }
            Err(e) => log::warn!("[{}] {}", SELECTION_QUERY_KEY, e),
        }
    }

    /// Back to the first page of the current magazine with the stack re-run.
    pub fn reset_view(&mut self) {
        self.carousel.reset(&mut self.session);
        self.stack.reset();
        self.stack.animate_in();
        self.book.close();
        log::info!("[view] reset");
    }

    pub fn step_magazine(&mut self, delta: isize) {
        let m = self.magazines.step(delta);
        self.book = PageBook::for_magazine(m);
        self.carousel.reset(&mut self.session);
        log::info!("[magazine] {}", m.name());
    }

    pub fn orientation(&self) -> Orientation {
        let v = self.stack.viewport();
        Orientation::from_viewport(v.width, v.height)
    }

    /// One pointer move of an active drag.
    pub fn drag_moved(&mut self, delta: Vec2, displacement: Vec2) {
        let tap = self.config.interaction.tap(self.orientation());
        if let Some(dy) = self
            .drag_scroll
            .on_move(delta, displacement, tap.max_movement_px)
        {
            self.session.push_delta(dy * DRAG_DELTA_SCALE);
        }
    }

    pub fn classify_release(&mut self, drag: &DragGesture) -> Gesture {
        let gesture = classify_drag(drag, self.orientation(), &self.config.interaction);
        self.drag_scroll.finish(gesture)
    }

    /// Swiping left moves forward: the next description card while a skill
    /// is open, otherwise the next magazine.
    pub fn swipe(&mut self, direction: i32) {
        self.sync_descriptions();
        match self.descriptions.as_mut() {
            Some((id, cards)) => {
                let index = if direction < 0 {
                    cards.next()
                } else {
                    cards.previous()
                };
                log::info!("[descriptions] {} card {}", id, index);
            }
            None => self.step_magazine(-direction as isize),
        }
    }

    /// Rebuild the description cards when the selected skill changes.
    pub fn sync_descriptions(&mut self) {
        let selected = self.stack.selected();
        if self.descriptions.as_ref().map(|(id, _)| id.as_str()) == selected {
            return;
        }
        self.descriptions = selected.map(|id| {
            let cards = self
                .content
                .sections()
                .iter()
                .find(|s| s.title == id)
                .map_or(1, |s| s.page_count.max(1) as usize);
            (id.to_string(), DescriptionCarousel::new(cards))
        });
    }

    pub fn description_index(&self) -> Option<usize> {
        self.descriptions.as_ref().map(|(_, cards)| cards.index())
    }
}
