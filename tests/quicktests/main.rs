//! Properties every tree must have no matter which keys went in, in which order.

mod properties;
