//! Seed data for the Mumbai suburban network.

use crate::domain::Station;

/// (name, line, lat, lng) in network order.
const MUMBAI: &[(&str, &str, f64, f64)] = &[
    ("Churchgate", "Western", 18.9322, 72.8264),
    ("Marine Lines", "Western", 18.9434, 72.8234),
    ("Charni Road", "Western", 18.9525, 72.8208),
    ("Grant Road", "Western", 18.9628, 72.8147),
    ("Mumbai Central", "Western", 18.9685, 72.8197),
    ("Mahalaxmi", "Western", 18.9823, 72.8231),
    ("Lower Parel", "Western", 19.0002, 72.8306),
    ("Elphinstone", "Western", 19.0076, 72.8316),
    ("Dadar", "Western", 19.0176, 72.8436),
    ("Matunga Road", "Western", 19.0287, 72.8464),
    ("Mahim", "Western", 19.0381, 72.8407),
    ("Bandra", "Western", 19.0540, 72.8406),
    ("Khar", "Western", 19.0698, 72.8365),
    ("Santacruz", "Western", 19.0812, 72.8410),
    ("Vile Parle", "Western", 19.0979, 72.8442),
    ("Andheri", "Western", 19.1197, 72.8464),
    ("Jogeshwari", "Western", 19.1357, 72.8497),
    ("Goregaon", "Western", 19.1642, 72.8497),
    ("Malad", "Western", 19.1866, 72.8486),
    ("Kandivali", "Western", 19.2074, 72.8508),
    ("Borivali", "Western", 19.2302, 72.8573),
    ("Dahisar", "Western", 19.2586, 72.8636),
    ("CSMT", "Central", 18.9398, 72.8355),
    ("Masjid", "Central", 18.9472, 72.8331),
    ("Sandhurst Road", "Central", 18.9551, 72.8431),
    ("Byculla", "Central", 18.9787, 72.8332),
    ("Chinchpokli", "Central", 18.9904, 72.8317),
    ("Parel", "Central", 19.0033, 72.8394),
    ("Kurla", "Central", 19.0633, 72.8791),
    ("Vidyavihar", "Central", 19.0825, 72.8970),
    ("Ghatkopar", "Central", 19.0863, 72.9081),
    ("Vikhroli", "Central", 19.1089, 72.9252),
    ("Kanjurmarg", "Central", 19.1283, 72.9320),
    ("Bhandup", "Central", 19.1442, 72.9371),
    ("Nahur", "Central", 19.1520, 72.9515),
    ("Mulund", "Central", 19.1722, 72.9558),
    ("Thane", "Central", 19.1871, 72.9785),
    ("Kalwa", "Central", 19.2015, 73.0016),
    ("Mumbra", "Central", 19.2052, 73.0413),
    ("Diva", "Central", 19.2194, 73.0872),
    ("Dombivli", "Central", 19.2183, 73.0869),
    ("Kalyan", "Central", 19.2403, 73.1305),
    ("Dockyard Road", "Harbour", 18.9626, 72.8445),
    ("Reay Road", "Harbour", 18.9747, 72.8484),
    ("Cotton Green", "Harbour", 18.9873, 72.8510),
    ("Sewri", "Harbour", 19.0038, 72.8575),
    ("Wadala", "Harbour", 19.0162, 72.8589),
    ("GTB Nagar", "Harbour", 19.0302, 72.8899),
    ("Chunabhatti", "Harbour", 19.0545, 72.8815),
    ("Tilak Nagar", "Harbour", 19.0649, 72.8916),
    ("Chembur", "Harbour", 19.0626, 72.8977),
    ("Govandi", "Harbour", 19.0543, 72.9117),
    ("Mankhurd", "Harbour", 19.0434, 72.9285),
    ("Vashi", "Harbour", 19.0768, 73.0004),
    ("Sanpada", "Harbour", 19.0685, 73.0129),
    ("Juinagar", "Harbour", 19.0591, 73.0301),
    ("Nerul", "Harbour", 19.0331, 73.0168),
    ("Seawoods", "Harbour", 19.0184, 73.0144),
    ("Belapur", "Harbour", 19.0154, 73.0350),
    ("Kharghar", "Harbour", 19.0435, 73.0678),
    ("Panvel", "Harbour", 19.0032, 73.1151),
    ("Kopar Khairane", "Trans-Harbour", 19.1006, 73.0109),
    ("Turbhe", "Trans-Harbour", 19.0700, 73.0200),
];

/// All stations of the Mumbai suburban network, Western line first.
pub fn mumbai_stations() -> Vec<Station> {
    MUMBAI
        .iter()
        .map(|&(name, line, lat, lng)| Station::new(name, line, lat, lng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let stations = mumbai_stations();
        let names: HashSet<_> = stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.len(), stations.len());
    }

    #[test]
    fn starts_with_churchgate() {
        let stations = mumbai_stations();
        assert_eq!(stations.len(), 63);
        assert_eq!(stations[0].name, "Churchgate");
        assert_eq!(stations[0].line, "Western");
    }

    #[test]
    fn coordinates_are_in_mumbai() {
        for s in mumbai_stations() {
            assert!((18.9..19.3).contains(&s.lat), "{} lat {}", s.name, s.lat);
            assert!((72.8..73.2).contains(&s.lng), "{} lng {}", s.name, s.lng);
        }
    }
}
