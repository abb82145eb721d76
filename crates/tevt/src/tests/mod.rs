mod clock;
mod event;
mod timer;
