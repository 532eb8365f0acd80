mod model;
mod ops;
