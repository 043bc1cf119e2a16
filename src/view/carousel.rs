//! Media resolution and carousel collaborator lifecycle

/// Kind of a media file, decided by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_name(name: &str) -> Self {
        let ext = name.rsplit('.').next().unwrap_or("").to_lowercase();
        match ext.as_str() {
            "mp4" | "webm" | "ogg" | "mov" => MediaKind::Video,
            // Unknown extensions fall back to image
            _ => MediaKind::Image,
        }
    }
}

/// A media file resolved to a full URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub url: String,
    pub kind: MediaKind,
}

/// Resolve bare media filenames against the post's folder URL
pub fn resolve_media(base_url: &str, source: &str, names: &[String]) -> Vec<MediaItem> {
    let base = base_url.trim_end_matches('/');
    names
        .iter()
        .map(|name| MediaItem {
            url: format!("{}/{}/{}", base, source, name),
            kind: MediaKind::from_name(name),
        })
        .collect()
}

/// A navigable media widget. The coordinator releases the previous mount on
/// every view transition before creating a new one.
pub trait Carousel {
    fn mount(&mut self, media: &[MediaItem]);
    fn unmount(&mut self);
}

/// Carousel that renders media as a plain list on stdout
#[derive(Default)]
pub struct TextCarousel;

impl Carousel for TextCarousel {
    fn mount(&mut self, media: &[MediaItem]) {
        println!("Media ({}):", media.len());
        for item in media {
            let label = match item.kind {
                MediaKind::Image => "image",
                MediaKind::Video => "video",
            };
            println!("  [{}] {}", label, item.url);
        }
    }

    fn unmount(&mut self) {}
}

/// Carousel that ignores all media
#[derive(Default)]
pub struct NullCarousel;

impl Carousel for NullCarousel {
    fn mount(&mut self, _media: &[MediaItem]) {}
    fn unmount(&mut self) {}
}
