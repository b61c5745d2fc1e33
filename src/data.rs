use crate::models::{ActivityPoint, Coordinate, Officer, RiskLevel, Tourist, Zone, ZoneStatus};

/// The monitored roster: zones owning their tourists, seeded once at startup.
pub struct Dataset {
    pub zones: Vec<Zone>,
}

impl Dataset {
    pub fn seeded() -> Self {
        Self {
            zones: seed_zones(),
        }
    }

    /// All tourists flattened in zone order, the order alert derivation
    /// and aggregation preserve.
    pub fn flattened_tourists(&self) -> Vec<Tourist> {
        self.zones
            .iter()
            .flat_map(|zone| zone.tourists.iter().cloned())
            .collect()
    }

    pub fn find_zone(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.zone_id == zone_id)
    }

    pub fn find_tourist(&self, tourist_id: &str) -> Option<(&Zone, &Tourist)> {
        self.zones.iter().find_map(|zone| {
            zone.tourists
                .iter()
                .find(|tourist| tourist.id == tourist_id)
                .map(|tourist| (zone, tourist))
        })
    }

    /// Case-insensitive roster search over name, nationality and id.
    pub fn search(&self, query: &str) -> Vec<&Tourist> {
        let needle = query.to_lowercase();
        self.zones
            .iter()
            .flat_map(|zone| zone.tourists.iter())
            .filter(|tourist| {
                tourist.name.to_lowercase().contains(&needle)
                    || tourist.id.to_lowercase().contains(&needle)
                    || tourist
                        .nationality
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

pub fn seed_officers() -> Vec<Officer> {
    vec![
        Officer {
            id: "OFF001".into(),
            name: "Officer Rajesh Kumar".into(),
            email: "rajesh.kumar@tourism.gov.in".into(),
            dept_id: "TOUR-DEL-001".into(),
            role: "Senior Safety Officer".into(),
        },
        Officer {
            id: "OFF002".into(),
            name: "Officer Priya Sharma".into(),
            email: "priya.sharma@tourism.gov.in".into(),
            dept_id: "TOUR-DEL-002".into(),
            role: "Zone Coordinator".into(),
        },
    ]
}

pub fn seed_zones() -> Vec<Zone> {
    vec![
        Zone {
            zone_id: "Z001".into(),
            name: "Hilltop View".into(),
            status: ZoneStatus::Safe,
            coordinates: Some(Coordinate {
                lat: 28.6501,
                lng: 77.2323,
            }),
            radius_meters: Some(500),
            tourists: vec![
                Tourist {
                    id: "T001".into(),
                    name: "Alice Kumar".into(),
                    location: Coordinate {
                        lat: 28.6501,
                        lng: 77.2323,
                    },
                    risk_level: RiskLevel::Low,
                    id_issued: true,
                    blockchain_id: Some("bc_0x1234SAFE".into()),
                    sos_active: false,
                    nationality: Some("India".into()),
                    emergency_contact: Some("+91-9876543210".into()),
                    itinerary: Some("Delhi Heritage Tour - 3 days".into()),
                    safety_score: Some(95),
                    last_active: Some("5 minutes ago".into()),
                },
                Tourist {
                    id: "T002".into(),
                    name: "Raj Verma".into(),
                    location: Coordinate {
                        lat: 28.6503,
                        lng: 77.2328,
                    },
                    risk_level: RiskLevel::Low,
                    id_issued: true,
                    blockchain_id: Some("bc_0x1234SAFE2".into()),
                    sos_active: false,
                    nationality: Some("India".into()),
                    emergency_contact: Some("+91-9876543211".into()),
                    itinerary: Some("Red Fort & India Gate Visit".into()),
                    safety_score: Some(92),
                    last_active: Some("3 minutes ago".into()),
                },
            ],
            nearby_help_centers: vec![
                "Police Outpost A".into(),
                "Tourist Control Room North".into(),
            ],
        },
        Zone {
            zone_id: "Z002".into(),
            name: "Riverfront".into(),
            status: ZoneStatus::Risky,
            coordinates: Some(Coordinate {
                lat: 28.7041,
                lng: 77.1025,
            }),
            radius_meters: Some(800),
            tourists: vec![
                Tourist {
                    id: "T003".into(),
                    name: "Fatima Sheikh".into(),
                    location: Coordinate {
                        lat: 28.7041,
                        lng: 77.1025,
                    },
                    risk_level: RiskLevel::High,
                    id_issued: true,
                    blockchain_id: Some("bc_0xRISKY001".into()),
                    sos_active: true,
                    nationality: Some("UAE".into()),
                    emergency_contact: Some("+971-501234567".into()),
                    itinerary: Some("Yamuna River Cruise".into()),
                    safety_score: Some(45),
                    last_active: Some("1 minute ago".into()),
                },
                Tourist {
                    id: "T004".into(),
                    name: "John Mathew".into(),
                    location: Coordinate {
                        lat: 28.7045,
                        lng: 77.1028,
                    },
                    risk_level: RiskLevel::High,
                    id_issued: false,
                    blockchain_id: None,
                    sos_active: false,
                    nationality: Some("USA".into()),
                    emergency_contact: Some("+1-555-0123".into()),
                    itinerary: Some("Independent Travel".into()),
                    safety_score: Some(60),
                    last_active: Some("8 minutes ago".into()),
                },
                Tourist {
                    id: "T005".into(),
                    name: "Mei Lin".into(),
                    location: Coordinate {
                        lat: 28.705,
                        lng: 77.103,
                    },
                    risk_level: RiskLevel::Moderate,
                    id_issued: true,
                    blockchain_id: Some("bc_0xRISKY002".into()),
                    sos_active: false,
                    nationality: Some("China".into()),
                    emergency_contact: Some("+86-138-0013-8000".into()),
                    itinerary: Some("Cultural Heritage Tour".into()),
                    safety_score: Some(75),
                    last_active: Some("12 minutes ago".into()),
                },
            ],
            nearby_help_centers: vec!["Police HQ South".into(), "First Aid Center".into()],
        },
        Zone {
            zone_id: "Z003".into(),
            name: "City Museum".into(),
            status: ZoneStatus::Moderate,
            coordinates: Some(Coordinate {
                lat: 28.6139,
                lng: 77.209,
            }),
            radius_meters: Some(300),
            tourists: vec![Tourist {
                id: "T006".into(),
                name: "Carlos Rivera".into(),
                location: Coordinate {
                    lat: 28.6139,
                    lng: 77.209,
                },
                risk_level: RiskLevel::Moderate,
                id_issued: true,
                blockchain_id: Some("bc_0xMUSEUM001".into()),
                sos_active: false,
                nationality: Some("Spain".into()),
                emergency_contact: Some("+34-600-123-456".into()),
                itinerary: Some("Museum & Art Gallery Tour".into()),
                safety_score: Some(82),
                last_active: Some("15 minutes ago".into()),
            }],
            nearby_help_centers: vec![
                "Museum Security Desk".into(),
                "Tourist Helpline Booth".into(),
            ],
        },
        Zone {
            zone_id: "Z004".into(),
            name: "Desert Safari Point".into(),
            status: ZoneStatus::Risky,
            coordinates: Some(Coordinate {
                lat: 26.9124,
                lng: 75.7873,
            }),
            radius_meters: Some(1200),
            tourists: vec![
                Tourist {
                    id: "T007".into(),
                    name: "Ananya Gupta".into(),
                    location: Coordinate {
                        lat: 26.9124,
                        lng: 75.7873,
                    },
                    risk_level: RiskLevel::High,
                    id_issued: false,
                    blockchain_id: None,
                    sos_active: false,
                    nationality: Some("India".into()),
                    emergency_contact: Some("+91-9876543212".into()),
                    itinerary: Some("Rajasthan Desert Experience".into()),
                    safety_score: Some(55),
                    last_active: Some("25 minutes ago".into()),
                },
                Tourist {
                    id: "T008".into(),
                    name: "Michael Brown".into(),
                    location: Coordinate {
                        lat: 26.9128,
                        lng: 75.7876,
                    },
                    risk_level: RiskLevel::High,
                    id_issued: true,
                    blockchain_id: Some("bc_0xDESERT001".into()),
                    sos_active: true,
                    nationality: Some("UK".into()),
                    emergency_contact: Some("+44-7911-123456".into()),
                    itinerary: Some("Adventure Desert Safari".into()),
                    safety_score: Some(40),
                    last_active: Some("2 minutes ago".into()),
                },
            ],
            nearby_help_centers: vec![
                "Tourist Patrol Camp".into(),
                "Emergency First Response Tent".into(),
            ],
        },
        Zone {
            zone_id: "Z005".into(),
            name: "Beachfront".into(),
            status: ZoneStatus::Safe,
            coordinates: Some(Coordinate {
                lat: 15.2993,
                lng: 74.124,
            }),
            radius_meters: Some(600),
            tourists: vec![
                Tourist {
                    id: "T009".into(),
                    name: "Sophia Lee".into(),
                    location: Coordinate {
                        lat: 15.2993,
                        lng: 74.124,
                    },
                    risk_level: RiskLevel::Low,
                    id_issued: true,
                    blockchain_id: Some("bc_0xBEACH001".into()),
                    sos_active: false,
                    nationality: Some("South Korea".into()),
                    emergency_contact: Some("+82-10-1234-5678".into()),
                    itinerary: Some("Goa Beach Holiday".into()),
                    safety_score: Some(90),
                    last_active: Some("10 minutes ago".into()),
                },
                Tourist {
                    id: "T010".into(),
                    name: "Arjun Singh".into(),
                    location: Coordinate {
                        lat: 15.2998,
                        lng: 74.1244,
                    },
                    risk_level: RiskLevel::Low,
                    id_issued: true,
                    blockchain_id: Some("bc_0xBEACH002".into()),
                    sos_active: false,
                    nationality: Some("India".into()),
                    emergency_contact: Some("+91-9876543213".into()),
                    itinerary: Some("Water Sports & Beach Activities".into()),
                    safety_score: Some(88),
                    last_active: Some("7 minutes ago".into()),
                },
            ],
            nearby_help_centers: vec!["Beach Police Station".into(), "Lifeguard Center".into()],
        },
    ]
}

/// Fixed 24-hour telemetry series backing the activity line chart.
pub fn activity_timeline() -> Vec<ActivityPoint> {
    [
        ("00:00", 45),
        ("04:00", 12),
        ("08:00", 89),
        ("12:00", 156),
        ("16:00", 203),
        ("20:00", 187),
        ("24:00", 98),
    ]
    .into_iter()
    .map(|(time, tourists)| ActivityPoint {
        time: time.into(),
        tourists,
    })
    .collect()
}
