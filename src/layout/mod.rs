/// Pure geometry behind the renderers: image tilings, the heart curve, word
/// placement, and the 3D projection. Nothing here touches the GPU, so it all
/// tests headless.
pub mod cloud;
pub mod grid;
pub mod heart;
pub mod projection;
