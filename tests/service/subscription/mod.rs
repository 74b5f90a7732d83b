mod create;
mod destroy;
mod find;
mod restore;
mod update;
