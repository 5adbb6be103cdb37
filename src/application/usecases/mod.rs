pub mod dispatch_gesture;
pub mod recognition_loop;

pub use dispatch_gesture::DispatchManager;
pub use recognition_loop::RecognitionLoop;
