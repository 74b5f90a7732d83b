mod candidate;
mod listing;
mod subscription;
