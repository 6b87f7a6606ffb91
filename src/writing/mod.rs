/*! Display collaborators.

Rendering stays out of the numeric core: these helpers take computed
series and reports and turn them into text tables or CSV rows. The CSV
output feeds the external plotting collaborator (rank/frequency curves,
observed vs. expected overlays).
!*/
mod csvwriter;
mod report;

pub use csvwriter::{write_comparison, write_ranked_series};
pub use report::{comparison_preview, fit_summary, top_words};
