mod destroy;
mod reassign;
mod soft_delete;
