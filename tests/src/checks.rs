mod ap;
mod aps;
mod profiles;
