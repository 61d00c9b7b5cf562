pub mod mock_notifier;
pub mod mock_surface;

pub use mock_notifier::MockNotifier;
pub use mock_surface::MockSurface;
