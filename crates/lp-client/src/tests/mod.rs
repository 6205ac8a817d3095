mod endpoints;
mod navigator;
