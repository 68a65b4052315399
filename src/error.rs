use thiserror::Error;

pub type ZoomResult<T> = Result<T, ZoomError>;

#[derive(Debug, Error)]
pub enum ZoomError {
    #[error("invalid chart area: left={left}, top={top}, right={right}, bottom={bottom}")]
    InvalidChartArea {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },

    #[error("unknown scale `{0}`")]
    UnknownScale(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
