pub use hypervolume::HypervolumeIndicator;

mod hypervolume;
