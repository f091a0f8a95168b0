use crate::schemas::{
    computing::{OpenSpeed, CPU},
    money::Price,
};

/// Every CPU in the catalog, in the order they were authored.
#[rustfmt::skip]
pub const CPUS: [CPU; 4] = [
    CPU { name: "Ryzen 7 7800X3D", year: 2023, open_speed: OpenSpeed(980), price: Price(2699) },
    CPU { name: "Core i5-13600K",  year: 2022, open_speed: OpenSpeed(920), price: Price(1999) },
    CPU { name: "Ryzen 5 5600",    year: 2020, open_speed: OpenSpeed(620), price: Price(799)  },
    CPU { name: "Core i3-12100F",  year: 2022, open_speed: OpenSpeed(580), price: Price(699)  },
];

/// Get all CPU records, in catalog order.
pub fn cpus() -> &'static [CPU] {
    &CPUS
}
