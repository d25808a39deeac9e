mod attach_face;

pub use attach_face::AttachFace;
