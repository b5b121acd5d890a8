pub mod stdout_presenter;

pub use stdout_presenter::StdoutPresenter;
