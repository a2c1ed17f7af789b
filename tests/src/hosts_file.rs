mod fixtures;
mod integration;
mod round_trip;
