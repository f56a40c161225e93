// Resume files in and out of the backend: master resume uploads, guest
// uploads for scoring, and saving rendered PDFs.

pub mod handlers;
