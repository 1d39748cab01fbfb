mod license_aggregator;

pub use license_aggregator::LicenseAggregator;
