// Scoring a stored resume against a job description. The score itself is
// computed by the backend; these handlers only relay it.

pub mod handlers;
