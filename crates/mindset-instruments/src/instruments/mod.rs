pub mod mindset;
