pub mod console_controller;
pub mod scripted_sensor;
pub mod spotify_controller;
pub mod udp_sensor;
