//! Renderings of a converted game: stats JSON, game CSV, HTML scorecard and
//! the scorecard form-field map. All producers return strings; callers own
//! the filesystem.

pub mod cells;
pub mod csv_out;
pub mod form_fields;
pub mod html;
pub mod json;

pub use cells::{escape_html, slug};
pub use csv_out::{game_csv, GAME_CSV_HEADER};
pub use form_fields::form_fields;
pub use html::render_html;
pub use json::stats_json;
