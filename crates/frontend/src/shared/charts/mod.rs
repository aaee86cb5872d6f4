pub mod bar;
pub mod geo;
pub mod line;
pub mod scale;

pub use bar::{BarChart, HBarChart};
pub use geo::{GeoBubbleMap, GeoPoint};
pub use line::{LineChart, LineSeries};
