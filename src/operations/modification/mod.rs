mod detach_face;

pub use detach_face::DetachFace;
