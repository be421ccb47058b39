pub mod views;

pub use views::ResultView;
