mod helpers;
mod transform;
