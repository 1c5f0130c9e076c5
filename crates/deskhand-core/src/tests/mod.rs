mod descriptor;
mod engine;
mod fakes;
