pub mod answer;
pub mod report;
pub mod view;
