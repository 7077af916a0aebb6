use thiserror::Error;

use crate::content::ContentError;
use crate::highlight::HighlightError;
use crate::model::ProgressError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Highlight(#[from] HighlightError),
}
