mod classify;
mod locate;
