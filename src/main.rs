use iced::Size;
use rfd::FileDialog;
use std::path::PathBuf;

use record::CocktailRecord;
use thumb::ResolvedImage;
use ui::DetailView;

// Declare the application modules
mod record;
mod thumb;
mod ui;

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Background thumbnail resolution completed
    ThumbnailResolved(ResolvedImage),
}

fn main() -> iced::Result {
    env_logger::init();

    // Pick the record to show: a path argument, a file picker, or the
    // built-in sample when neither yields one
    let record = match record_source() {
        Some(path) => match CocktailRecord::load(&path) {
            Ok(record) => record,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        },
        None => sample_record(),
    };

    log::info!("🍸 Showing details for {}", record.display_name());

    iced::application(DetailView::title, DetailView::update, DetailView::view)
        .theme(DetailView::theme)
        .window_size(Size::new(ui::detail::WINDOW_WIDTH, ui::detail::WINDOW_HEIGHT))
        .centered()
        .run_with(move || DetailView::new(record.clone()))
}

/// Find the record file to display.
///
/// The first CLI argument wins; without one, a native picker is shown.
/// Cancelling the picker returns `None`.
fn record_source() -> Option<PathBuf> {
    if let Some(arg) = std::env::args().nth(1) {
        return Some(PathBuf::from(arg));
    }

    FileDialog::new()
        .set_title("Select a Cocktail Record")
        .add_filter("JSON record", &["json"])
        .pick_file()
}

/// Built-in record shown when no file is chosen, with a measure-less final
/// ingredient so the sparse path is visible.
fn sample_record() -> CocktailRecord {
    CocktailRecord::from_json(&serde_json::json!({
        "name": "Margarita",
        "thumbnailUrl": "https://www.thecocktaildb.com/images/media/drink/5noda61589575158.jpg",
        "instructions": "Rub the rim of the glass with the lime slice to make the salt stick to it. \
            Take care to moisten only the outer rim and sprinkle the salt on it. The salt should \
            present to the lips of the imbiber and never mix into the cocktail. Shake the other \
            ingredients with ice, then carefully pour into the glass.",
        "ingredient1": "Tequila",
        "measure1": "1 1/2 oz",
        "ingredient2": "Triple sec",
        "measure2": "1/2 oz",
        "ingredient3": "Lime juice",
        "measure3": "1 oz",
        "ingredient4": "Salt",
    }))
}
