/// Cocktail detail view
///
/// The whole window for one record: thumbnail on top, the ingredient list
/// in a capped region below it, instructions filling the rest. Built once
/// per record; the only state that changes afterwards is the thumbnail
/// slot, which settles exactly once.

use iced::task::Handle;
use iced::widget::{column, container, image, scrollable, text};
use iced::{Element, Length, Task, Theme};

use crate::record::{ingredient_lines, CocktailRecord};
use crate::thumb::{resolver, ResolvedImage};
use crate::Message;

/// Initial window width in logical pixels
pub const WINDOW_WIDTH: f32 = 600.0;
/// Initial window height in logical pixels
pub const WINDOW_HEIGHT: f32 = 800.0;

/// Vertical room per line in the ingredient region
const LINE_HEIGHT: usize = 24;
/// Slack added below the ingredient lines
const LIST_PADDING: usize = 10;
/// The ingredient region never grows past this; it scrolls instead
const LIST_MAX_HEIGHT: usize = 200;

/// Lifecycle of the thumbnail area.
#[derive(Debug)]
enum ThumbnailSlot {
    /// The fetch task is still running
    Loading,
    /// Scaled bitmap ready to draw
    Loaded(image::Handle),
    /// No usable URL, or the fetch failed
    Unavailable,
}

/// State of one detail window.
pub struct DetailView {
    /// Window title: the drink name, or "Cocktail" when unnamed
    title: String,
    /// Pre-built ingredient display lines, in slot order
    ingredients: Vec<String>,
    /// Preparation text, empty when the record has none
    instructions: String,
    /// Current state of the thumbnail area
    thumbnail: ThumbnailSlot,
    /// Abort handle for the in-flight fetch, cleared once it resolves
    fetch: Option<Handle>,
}

impl DetailView {
    /// Build the view state for a record and kick off the thumbnail fetch.
    ///
    /// The title and ingredient lines are computed up front; the thumbnail
    /// is the only part that arrives later, via `Message::ThumbnailResolved`.
    /// URLs that fail the scheme gate settle as `Unavailable` immediately,
    /// without spawning a task.
    pub fn new(record: CocktailRecord) -> (Self, Task<Message>) {
        let ingredients = ingredient_lines(&record);

        let (thumbnail, task, fetch) = match record
            .thumbnail_url
            .as_deref()
            .filter(|url| resolver::eligible(url))
        {
            Some(url) => {
                let (task, handle) = Task::perform(
                    resolver::resolve(Some(url.to_owned())),
                    Message::ThumbnailResolved,
                )
                .abortable();

                (ThumbnailSlot::Loading, task, Some(handle))
            }
            None => (ThumbnailSlot::Unavailable, Task::none(), None),
        };

        (
            DetailView {
                title: record.display_name().to_owned(),
                ingredients,
                instructions: record.instructions.unwrap_or_default(),
                thumbnail,
                fetch,
            },
            task,
        )
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailResolved(resolved) => {
                self.fetch = None;

                self.thumbnail = match resolved {
                    ResolvedImage::Loaded(bitmap) => {
                        log::debug!("thumbnail ready: {}x{}", bitmap.width, bitmap.height);

                        // Convert to a widget handle once; view() only clones it
                        ThumbnailSlot::Loaded(image::Handle::from_rgba(
                            bitmap.width,
                            bitmap.height,
                            bitmap.pixels,
                        ))
                    }
                    ResolvedImage::Unavailable => ThumbnailSlot::Unavailable,
                };

                Task::none()
            }
        }
    }

    /// Build the user interface
    pub fn view(&self) -> Element<Message> {
        column![
            self.thumbnail_block(),
            text("Ingredients:"),
            scrollable(text(self.ingredients.join("\n")))
                .width(Length::Fill)
                .height(Length::Fixed(ingredients_height(self.ingredients.len()))),
            text("Instructions:"),
            // The one element allowed to claim the remaining vertical space
            scrollable(text(&self.instructions))
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .spacing(10)
        .padding(10)
        .into()
    }

    /// The thumbnail area: a loading caption, the scaled bitmap, or the
    /// fallback caption, always centered horizontally.
    fn thumbnail_block(&self) -> Element<Message> {
        match &self.thumbnail {
            ThumbnailSlot::Loading => container(text("Loading image..."))
                .center_x(Length::Fill)
                .into(),
            ThumbnailSlot::Loaded(handle) => container(
                image(handle.clone()).width(Length::Fixed(resolver::DISPLAY_WIDTH as f32)),
            )
            .center_x(Length::Fill)
            .into(),
            ThumbnailSlot::Unavailable => container(text("No image available"))
                .center_x(Length::Fill)
                .into(),
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        self.title.clone()
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

impl Drop for DetailView {
    /// Abort the fetch if the view goes away before it resolves.
    fn drop(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            fetch.abort();
        }
    }
}

/// Height of the ingredient region: one line per entry plus slack, capped
/// at `LIST_MAX_HEIGHT`.
fn ingredients_height(count: usize) -> f32 {
    (count * LINE_HEIGHT + LIST_PADDING).min(LIST_MAX_HEIGHT) as f32
}
