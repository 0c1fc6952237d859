pub mod file_io;
pub mod ode_solvers;
pub mod raster_canvas;
pub mod stopwatch;
pub mod surface;
