pub mod frame_state;
