//! View coordination and history-driven navigation
//!
//! Models the reader's three views as an explicit state machine. Entering a
//! view is either push-addressable (a new history entry) or a silent replay,
//! which is how back/forward navigation re-enters old states.

pub mod carousel;

pub use carousel::{Carousel, MediaItem, MediaKind, NullCarousel, TextCarousel};

use crate::content::Post;
use crate::filter;

/// The closed set of addressable views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    List,
    About,
    /// Single-post view, identified by the post's source path
    Post(String),
}

impl View {
    /// Derive the initial view from an address fragment.
    ///
    /// An empty fragment or `about` opens the about view, `list` the post
    /// list; anything else is looked up as a post source path or bare folder
    /// name, falling back to the about view when nothing matches.
    pub fn from_fragment(fragment: &str, posts: &[Post]) -> Self {
        let hash = fragment.trim_start_matches('#').trim();

        if hash.is_empty() || hash.eq_ignore_ascii_case("about") {
            return View::About;
        }
        if hash.eq_ignore_ascii_case("list") {
            return View::List;
        }

        match posts.iter().find(|p| p.source == hash || p.folder == hash) {
            Some(post) => View::Post(post.source.clone()),
            None => View::About,
        }
    }
}

/// Owns the loaded post collection, the derived filtered view, and the
/// navigation history for one reading session.
///
/// Writer discipline: the post collection is written once at construction,
/// the filtered subset only by [`Session::set_filters`], and the carousel
/// only around view transitions.
pub struct Session {
    posts: Vec<Post>,
    filtered: Vec<usize>,
    tag: String,
    query: String,
    current: View,
    history: Vec<View>,
    base_url: String,
    carousel: Box<dyn Carousel>,
}

impl Session {
    /// Start a session on a loaded post collection, entering the view the
    /// address fragment names.
    pub fn start(
        posts: Vec<Post>,
        base_url: &str,
        carousel: Box<dyn Carousel>,
        fragment: &str,
    ) -> Self {
        let initial = View::from_fragment(fragment, &posts);
        let filtered = (0..posts.len()).collect();
        let mut session = Self {
            posts,
            filtered,
            tag: String::new(),
            query: String::new(),
            current: View::About,
            history: vec![initial.clone()],
            base_url: base_url.to_string(),
            carousel,
        };
        session.enter(initial);
        session
    }

    pub fn current(&self) -> &View {
        &self.current
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// The current filtered subset, in collection order
    pub fn filtered(&self) -> Vec<&Post> {
        self.filtered.iter().map(|&i| &self.posts[i]).collect()
    }

    pub fn vocabulary(&self) -> Vec<String> {
        filter::vocabulary(&self.posts)
    }

    pub fn find_post(&self, source: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.source == source)
    }

    /// Recompute the filtered view for a tag and a title query. The previous
    /// subset is replaced wholesale.
    pub fn set_filters(&mut self, tag: &str, query: &str) {
        self.tag = tag.to_string();
        self.query = query.to_string();
        self.filtered = filter::select(&self.posts, tag, query);
    }

    /// Enter a view and push it onto the history
    pub fn navigate(&mut self, view: View) {
        self.history.push(view.clone());
        self.enter(view);
    }

    /// Re-enter a view without touching history (back/forward replay)
    pub fn replay(&mut self, view: View) {
        self.enter(view);
    }

    /// Pop the current history entry and replay the previous one
    pub fn back(&mut self) -> Option<&View> {
        if self.history.len() <= 1 {
            return None;
        }
        self.history.pop();
        let view = self.history.last()?.clone();
        self.enter(view);
        Some(&self.current)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Transition into a view. The previous carousel mount is always
    /// released; a new one is created only for a post view with media.
    fn enter(&mut self, view: View) {
        self.carousel.unmount();
        if let View::Post(source) = &view {
            let media = self
                .find_post(source)
                .map(|post| carousel::resolve_media(&self.base_url, &post.source, &post.media))
                .unwrap_or_default();
            if !media.is_empty() {
                self.carousel.mount(&media);
            }
        }
        self.current = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn post(folder: &str, media: &[&str]) -> Post {
        Post {
            title: folder.to_string(),
            date: Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            tags: vec!["t".to_string()],
            source: format!("blogs/{}", folder),
            folder: folder.to_string(),
            file: "index.md".to_string(),
            raw: String::new(),
            media: media.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[derive(Default)]
    struct CarouselLog {
        mounts: usize,
        unmounts: usize,
        last_media: Vec<MediaItem>,
    }

    struct RecordingCarousel {
        log: Rc<RefCell<CarouselLog>>,
    }

    impl Carousel for RecordingCarousel {
        fn mount(&mut self, media: &[MediaItem]) {
            let mut log = self.log.borrow_mut();
            log.mounts += 1;
            log.last_media = media.to_vec();
        }

        fn unmount(&mut self) {
            self.log.borrow_mut().unmounts += 1;
        }
    }

    fn session_with_log(posts: Vec<Post>, fragment: &str) -> (Session, Rc<RefCell<CarouselLog>>) {
        let log = Rc::new(RefCell::new(CarouselLog::default()));
        let carousel = Box::new(RecordingCarousel { log: log.clone() });
        let session = Session::start(posts, "https://example.com", carousel, fragment);
        (session, log)
    }

    #[test]
    fn test_fragment_routing() {
        let posts = vec![post("one", &[])];
        assert_eq!(View::from_fragment("", &posts), View::About);
        assert_eq!(View::from_fragment("#about", &posts), View::About);
        assert_eq!(View::from_fragment("#LIST", &posts), View::List);
        assert_eq!(
            View::from_fragment("#blogs/one", &posts),
            View::Post("blogs/one".to_string())
        );
        assert_eq!(
            View::from_fragment("one", &posts),
            View::Post("blogs/one".to_string())
        );
        // Unknown fragments fall back to the about view
        assert_eq!(View::from_fragment("#missing", &posts), View::About);
    }

    #[test]
    fn test_navigate_and_back() {
        let (mut session, _) = session_with_log(vec![post("one", &[])], "#list");
        assert_eq!(session.current(), &View::List);

        session.navigate(View::Post("blogs/one".to_string()));
        assert_eq!(session.history_len(), 2);

        let view = session.back().cloned();
        assert_eq!(view, Some(View::List));
        assert_eq!(session.history_len(), 1);

        // Nothing left to go back to
        assert!(session.back().is_none());
    }

    #[test]
    fn test_replay_does_not_grow_history() {
        let (mut session, _) = session_with_log(vec![post("one", &[])], "#list");
        session.replay(View::About);
        assert_eq!(session.current(), &View::About);
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_carousel_lifecycle() {
        let posts = vec![post("plain", &[]), post("gallery", &["a.jpg", "b.mp4"])];
        let (mut session, log) = session_with_log(posts, "#list");

        session.navigate(View::Post("blogs/gallery".to_string()));
        {
            let log = log.borrow();
            assert_eq!(log.mounts, 1);
            assert_eq!(log.last_media.len(), 2);
            assert_eq!(
                log.last_media[0].url,
                "https://example.com/blogs/gallery/a.jpg"
            );
            assert_eq!(log.last_media[1].kind, MediaKind::Video);
        }

        // Every transition releases the previous mount; a post without
        // media never mounts a new one.
        let unmounts_before = log.borrow().unmounts;
        session.navigate(View::Post("blogs/plain".to_string()));
        let log = log.borrow();
        assert_eq!(log.unmounts, unmounts_before + 1);
        assert_eq!(log.mounts, 1);
    }

    #[test]
    fn test_filtered_view_recomputed_wholesale() {
        let mut one = post("one", &[]);
        one.title = "Alpha".to_string();
        one.tags = vec!["x".to_string()];
        let mut two = post("two", &[]);
        two.title = "Beta".to_string();
        two.tags = vec!["y".to_string()];

        let (mut session, _) = session_with_log(vec![one, two], "#list");
        assert_eq!(session.filtered().len(), 2);

        session.set_filters("x", "");
        let titles: Vec<_> = session.filtered().iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, vec!["Alpha"]);

        session.set_filters("", "bet");
        let titles: Vec<_> = session.filtered().iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, vec!["Beta"]);

        session.set_filters("", "");
        assert_eq!(session.filtered().len(), 2);
    }
}
