//! Static place catalog
//!
//! Reference data only. `street` is combined with the caller's city when a
//! `PlaceRecord` is built.

/// One catalog entry before the caller's city is filled in
#[derive(Debug, Clone, Copy)]
pub struct PlaceTemplate {
    pub id: u32,
    pub name: &'static str,
    pub place_type: &'static str,
    pub rating: f32,
    pub street: &'static str,
    pub description: &'static str,
    pub hours: &'static str,
    pub price: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
    pub amenities: &'static [&'static str],
    pub photos: &'static [&'static str],
}

/// A mood key and its three places
pub type Category = (&'static str, [PlaceTemplate; 3]);

pub const CATEGORIES: &[Category] = &[
    (
        "relaxed",
        [
            PlaceTemplate {
                id: 101,
                name: "Serenity Tea House",
                place_type: "cafe",
                rating: 4.7,
                street: "12 Willow Lane",
                description: "A quiet tea room with floor cushions, loose-leaf blends and soft instrumental music.",
                hours: "8:00 AM - 8:00 PM",
                price: "$$",
                phone: "(555) 201-1101",
                website: "https://example.com/serenity-tea-house",
                amenities: &["Wi-Fi", "Quiet zone", "Vegan options"],
                photos: &["https://images.unsplash.com/photo-1544787219-7f47ccb76574"],
            },
            PlaceTemplate {
                id: 102,
                name: "Lakeside Botanical Garden",
                place_type: "park",
                rating: 4.8,
                street: "400 Lakeshore Drive",
                description: "Shaded walking paths, a koi pond and benches overlooking the water.",
                hours: "7:00 AM - 7:00 PM",
                price: "Free",
                phone: "(555) 201-1102",
                website: "https://example.com/lakeside-garden",
                amenities: &["Walking trails", "Restrooms", "Benches"],
                photos: &["https://images.unsplash.com/photo-1585320806297-9794b3e4eeae"],
            },
            PlaceTemplate {
                id: 103,
                name: "Still Waters Spa",
                place_type: "spa",
                rating: 4.6,
                street: "88 Harbor Street",
                description: "Day spa with massage, sauna and a silent relaxation lounge.",
                hours: "10:00 AM - 9:00 PM",
                price: "$$$",
                phone: "(555) 201-1103",
                website: "https://example.com/still-waters-spa",
                amenities: &["Sauna", "Massage", "Lockers"],
                photos: &["https://images.unsplash.com/photo-1540555700478-4be289fbecef"],
            },
        ],
    ),
    (
        "energetic",
        [
            PlaceTemplate {
                id: 201,
                name: "Peak Performance Gym",
                place_type: "gym",
                rating: 4.5,
                street: "250 Iron Avenue",
                description: "Open-plan gym with free weights, rowers and drop-in HIIT classes.",
                hours: "5:00 AM - 11:00 PM",
                price: "$$",
                phone: "(555) 202-2201",
                website: "https://example.com/peak-performance",
                amenities: &["Showers", "Day passes", "Group classes"],
                photos: &["https://images.unsplash.com/photo-1534438327276-14e5300c3a48"],
            },
            PlaceTemplate {
                id: 202,
                name: "Vertical Limits Climbing",
                place_type: "climbing gym",
                rating: 4.7,
                street: "19 Quarry Road",
                description: "Bouldering and top-rope walls for every level, with gear rental.",
                hours: "6:00 AM - 10:00 PM",
                price: "$$",
                phone: "(555) 202-2202",
                website: "https://example.com/vertical-limits",
                amenities: &["Gear rental", "Intro lessons", "Cafe"],
                photos: &["https://images.unsplash.com/photo-1522163182402-834f871fd851"],
            },
            PlaceTemplate {
                id: 203,
                name: "Riverside Running Loop",
                place_type: "trail",
                rating: 4.4,
                street: "Riverside Park Entrance, 1 River Road",
                description: "A flat 5 km loop along the river with mile markers and water fountains.",
                hours: "Open 24 hours",
                price: "Free",
                phone: "(555) 202-2203",
                website: "https://example.com/riverside-loop",
                amenities: &["Water fountains", "Lighting", "Bike lane"],
                photos: &["https://images.unsplash.com/photo-1452626038306-9aae5e071dd3"],
            },
        ],
    ),
    (
        "adventurous",
        [
            PlaceTemplate {
                id: 301,
                name: "Summit Ridge Trailhead",
                place_type: "hiking",
                rating: 4.8,
                street: "Ridge Road, Mile 7",
                description: "Steep switchbacks up to a panoramic overlook. Bring water.",
                hours: "Sunrise - Sunset",
                price: "Free",
                phone: "(555) 203-3301",
                website: "https://example.com/summit-ridge",
                amenities: &["Parking", "Trail maps", "Scenic overlook"],
                photos: &["https://images.unsplash.com/photo-1551632811-561732d1e306"],
            },
            PlaceTemplate {
                id: 302,
                name: "Whitewater Outfitters",
                place_type: "outdoor activity",
                rating: 4.6,
                street: "3 Rapids Landing",
                description: "Guided kayaking and rafting trips for beginners and experts.",
                hours: "8:00 AM - 6:00 PM",
                price: "$$$",
                phone: "(555) 203-3302",
                website: "https://example.com/whitewater-outfitters",
                amenities: &["Equipment rental", "Guides", "Lockers"],
                photos: &["https://images.unsplash.com/photo-1530866495561-507c9faab2ed"],
            },
            PlaceTemplate {
                id: 303,
                name: "Hidden Alley Night Market",
                place_type: "market",
                rating: 4.5,
                street: "Lantern Alley, off 5th Street",
                description: "Street food stalls and pop-up vendors you will not find anywhere else.",
                hours: "6:00 PM - 1:00 AM",
                price: "$",
                phone: "(555) 203-3303",
                website: "https://example.com/night-market",
                amenities: &["Street food", "Live music", "Cash and card"],
                photos: &["https://images.unsplash.com/photo-1555396273-367ea4eb4db5"],
            },
        ],
    ),
    (
        "social",
        [
            PlaceTemplate {
                id: 401,
                name: "The Common Table",
                place_type: "restaurant",
                rating: 4.5,
                street: "77 Market Square",
                description: "Long shared tables, small plates and a lively weekend brunch.",
                hours: "11:00 AM - 11:00 PM",
                price: "$$",
                phone: "(555) 204-4401",
                website: "https://example.com/common-table",
                amenities: &["Group seating", "Reservations", "Outdoor patio"],
                photos: &["https://images.unsplash.com/photo-1414235077428-338989a2e8c0"],
            },
            PlaceTemplate {
                id: 402,
                name: "Dice & Draughts",
                place_type: "board game cafe",
                rating: 4.7,
                street: "15 Gamble Street",
                description: "Hundreds of board games, craft beer and staff who teach the rules.",
                hours: "12:00 PM - 12:00 AM",
                price: "$",
                phone: "(555) 204-4402",
                website: "https://example.com/dice-and-draughts",
                amenities: &["Game library", "Snacks", "Event nights"],
                photos: &["https://images.unsplash.com/photo-1610890716171-6b1bb98ffd09"],
            },
            PlaceTemplate {
                id: 403,
                name: "Sunset Rooftop Lounge",
                place_type: "bar",
                rating: 4.4,
                street: "200 High Street, 14th Floor",
                description: "Rooftop bar with skyline views and a DJ on Fridays.",
                hours: "4:00 PM - 2:00 AM",
                price: "$$$",
                phone: "(555) 204-4403",
                website: "https://example.com/sunset-rooftop",
                amenities: &["Views", "Cocktails", "DJ nights"],
                photos: &["https://images.unsplash.com/photo-1514933651103-005eec06c04b"],
            },
        ],
    ),
    (
        "creative",
        [
            PlaceTemplate {
                id: 501,
                name: "Modern Art Collective",
                place_type: "museum",
                rating: 4.6,
                street: "9 Gallery Row",
                description: "Rotating contemporary exhibits from local and visiting artists.",
                hours: "10:00 AM - 6:00 PM",
                price: "$",
                phone: "(555) 205-5501",
                website: "https://example.com/art-collective",
                amenities: &["Guided tours", "Gift shop", "Accessible"],
                photos: &["https://images.unsplash.com/photo-1518998053901-5348d3961a04"],
            },
            PlaceTemplate {
                id: 502,
                name: "Kiln & Wheel Pottery Studio",
                place_type: "workshop",
                rating: 4.8,
                street: "31 Clay Court",
                description: "Drop-in wheel sessions and glazing nights, all materials included.",
                hours: "1:00 PM - 9:00 PM",
                price: "$$",
                phone: "(555) 205-5502",
                website: "https://example.com/kiln-and-wheel",
                amenities: &["Materials included", "Aprons", "Beginner friendly"],
                photos: &["https://images.unsplash.com/photo-1565193566173-7a0ee3dbe261"],
            },
            PlaceTemplate {
                id: 503,
                name: "Inkwell Book Cafe",
                place_type: "bookstore",
                rating: 4.5,
                street: "64 Paper Street",
                description: "Secondhand books, journals and a cafe corner made for sketching.",
                hours: "9:00 AM - 9:00 PM",
                price: "$",
                phone: "(555) 205-5503",
                website: "https://example.com/inkwell",
                amenities: &["Wi-Fi", "Coffee", "Reading nooks"],
                photos: &["https://images.unsplash.com/photo-1481627834876-b7833e8f5570"],
            },
        ],
    ),
    (
        "focused",
        [
            PlaceTemplate {
                id: 601,
                name: "Central Public Library",
                place_type: "library",
                rating: 4.7,
                street: "1 Civic Plaza",
                description: "Silent reading rooms, bookable study pods and fast Wi-Fi.",
                hours: "9:00 AM - 9:00 PM",
                price: "Free",
                phone: "(555) 206-6601",
                website: "https://example.com/central-library",
                amenities: &["Wi-Fi", "Power outlets", "Silent floor"],
                photos: &["https://images.unsplash.com/photo-1521587760476-6c12a4b040da"],
            },
            PlaceTemplate {
                id: 602,
                name: "Deep Work Cowork",
                place_type: "coworking",
                rating: 4.5,
                street: "500 Commerce Street, Suite 3",
                description: "Hot desks, phone booths and a strict no-chatter main hall.",
                hours: "7:00 AM - 10:00 PM",
                price: "$$",
                phone: "(555) 206-6602",
                website: "https://example.com/deep-work",
                amenities: &["Day passes", "Monitors", "Phone booths"],
                photos: &["https://images.unsplash.com/photo-1497366216548-37526070297c"],
            },
            PlaceTemplate {
                id: 603,
                name: "Grind Coffee Lab",
                place_type: "cafe",
                rating: 4.4,
                street: "23 Bean Street",
                description: "Roomy tables, plenty of outlets and refills while you work.",
                hours: "6:30 AM - 7:00 PM",
                price: "$",
                phone: "(555) 206-6603",
                website: "https://example.com/grind-coffee-lab",
                amenities: &["Wi-Fi", "Power outlets", "Free refills"],
                photos: &["https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb"],
            },
        ],
    ),
    (
        "romantic",
        [
            PlaceTemplate {
                id: 701,
                name: "Candlelight Bistro",
                place_type: "restaurant",
                rating: 4.8,
                street: "18 Rose Street",
                description: "Intimate French bistro with a seasonal tasting menu.",
                hours: "5:00 PM - 11:00 PM",
                price: "$$$$",
                phone: "(555) 207-7701",
                website: "https://example.com/candlelight-bistro",
                amenities: &["Reservations", "Wine list", "Private booths"],
                photos: &["https://images.unsplash.com/photo-1559339352-11d035aa65de"],
            },
            PlaceTemplate {
                id: 702,
                name: "Harbor Sunset Pier",
                place_type: "waterfront",
                rating: 4.6,
                street: "Pier 9, Harbor Walk",
                description: "Boardwalk pier facing west, at its best just before dusk.",
                hours: "Open 24 hours",
                price: "Free",
                phone: "(555) 207-7702",
                website: "https://example.com/harbor-pier",
                amenities: &["Benches", "Lighting", "Ice cream stand"],
                photos: &["https://images.unsplash.com/photo-1507525428034-b723cf961d3e"],
            },
            PlaceTemplate {
                id: 703,
                name: "Starlight Observatory",
                place_type: "observatory",
                rating: 4.7,
                street: "1200 Hilltop Road",
                description: "Public telescope nights and a planetarium show under the dome.",
                hours: "7:00 PM - 12:00 AM",
                price: "$$",
                phone: "(555) 207-7703",
                website: "https://example.com/starlight-observatory",
                amenities: &["Telescopes", "Planetarium", "Parking"],
                photos: &["https://images.unsplash.com/photo-1419242902214-272b3f66ee7a"],
            },
        ],
    ),
    (
        "happy",
        [
            PlaceTemplate {
                id: 801,
                name: "Sprinkles Ice Cream Parlor",
                place_type: "dessert",
                rating: 4.7,
                street: "42 Sugar Lane",
                description: "Small-batch ice cream with rotating flavors and a toppings bar.",
                hours: "11:00 AM - 10:00 PM",
                price: "$",
                phone: "(555) 208-8801",
                website: "https://example.com/sprinkles",
                amenities: &["Vegan options", "Outdoor seating", "Kid friendly"],
                photos: &["https://images.unsplash.com/photo-1501443762994-82bd5dace89a"],
            },
            PlaceTemplate {
                id: 802,
                name: "Boardwalk Arcade",
                place_type: "entertainment",
                rating: 4.3,
                street: "5 Boardwalk Way",
                description: "Retro arcade cabinets, skee-ball and pinball with prize tickets.",
                hours: "10:00 AM - 12:00 AM",
                price: "$",
                phone: "(555) 208-8802",
                website: "https://example.com/boardwalk-arcade",
                amenities: &["Prizes", "Snack bar", "Party rooms"],
                photos: &["https://images.unsplash.com/photo-1511882150382-421056c89033"],
            },
            PlaceTemplate {
                id: 803,
                name: "Sunflower Farmers Market",
                place_type: "market",
                rating: 4.6,
                street: "Town Green, Main Street",
                description: "Weekend market with fresh produce, flowers and live music.",
                hours: "Sat-Sun 8:00 AM - 2:00 PM",
                price: "$",
                phone: "(555) 208-8803",
                website: "https://example.com/sunflower-market",
                amenities: &["Live music", "Local produce", "Dog friendly"],
                photos: &["https://images.unsplash.com/photo-1488459716781-31db52582fe9"],
            },
        ],
    ),
    (
        "sad",
        [
            PlaceTemplate {
                id: 901,
                name: "Comfort Corner Diner",
                place_type: "diner",
                rating: 4.5,
                street: "310 Elm Street",
                description: "Warm soup, pancakes all day and friendly regulars.",
                hours: "Open 24 hours",
                price: "$",
                phone: "(555) 209-9901",
                website: "https://example.com/comfort-corner",
                amenities: &["All-day breakfast", "Booths", "Takeout"],
                photos: &["https://images.unsplash.com/photo-1555396273-367ea4eb4db5"],
            },
            PlaceTemplate {
                id: 902,
                name: "Paws & Purrs Cat Cafe",
                place_type: "cafe",
                rating: 4.8,
                street: "27 Whisker Way",
                description: "Coffee with resident rescue cats who are happy to keep you company.",
                hours: "10:00 AM - 8:00 PM",
                price: "$$",
                phone: "(555) 209-9902",
                website: "https://example.com/paws-and-purrs",
                amenities: &["Cats", "Pastries", "Adoption info"],
                photos: &["https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba"],
            },
            PlaceTemplate {
                id: 903,
                name: "Old Oak Memorial Park",
                place_type: "park",
                rating: 4.4,
                street: "60 Oak Avenue",
                description: "Quiet lawns under old oak trees, good for a slow walk.",
                hours: "6:00 AM - 9:00 PM",
                price: "Free",
                phone: "(555) 209-9903",
                website: "https://example.com/old-oak-park",
                amenities: &["Benches", "Shade", "Walking paths"],
                photos: &["https://images.unsplash.com/photo-1500530855697-b586d89ba3ee"],
            },
        ],
    ),
    (
        "stressed",
        [
            PlaceTemplate {
                id: 1001,
                name: "Breathe Yoga Studio",
                place_type: "yoga studio",
                rating: 4.7,
                street: "14 Lotus Street",
                description: "Restorative and yin classes, mats provided.",
                hours: "6:00 AM - 9:00 PM",
                price: "$$",
                phone: "(555) 210-1001",
                website: "https://example.com/breathe-yoga",
                amenities: &["Mats provided", "Drop-in classes", "Showers"],
                photos: &["https://images.unsplash.com/photo-1545205597-3d9d02c29597"],
            },
            PlaceTemplate {
                id: 1002,
                name: "Float Haven",
                place_type: "wellness",
                rating: 4.6,
                street: "91 Calm Street",
                description: "Sensory deprivation float tanks in private suites.",
                hours: "9:00 AM - 10:00 PM",
                price: "$$$",
                phone: "(555) 210-1002",
                website: "https://example.com/float-haven",
                amenities: &["Private suites", "Showers", "Tea lounge"],
                photos: &["https://images.unsplash.com/photo-1544161515-4ab6ce6db874"],
            },
            PlaceTemplate {
                id: 1003,
                name: "Cedar Forest Walk",
                place_type: "nature reserve",
                rating: 4.8,
                street: "Cedar Reserve Gate, 2 Forest Road",
                description: "A gentle loop through old-growth cedars, away from traffic noise.",
                hours: "Sunrise - Sunset",
                price: "Free",
                phone: "(555) 210-1003",
                website: "https://example.com/cedar-forest",
                amenities: &["Trail maps", "Parking", "Restrooms"],
                photos: &["https://images.unsplash.com/photo-1448375240586-882707db888b"],
            },
        ],
    ),
];

/// Returned when the mood is missing or unknown
pub const DEFAULT_PLACES: [PlaceTemplate; 3] = [
    PlaceTemplate {
        id: 1,
        name: "Quiet Cafe",
        place_type: "cafe",
        rating: 4.5,
        street: "100 Main Street",
        description: "A cozy neighborhood cafe, good for any mood.",
        hours: "7:00 AM - 7:00 PM",
        price: "$",
        phone: "(555) 200-0001",
        website: "https://example.com/quiet-cafe",
        amenities: &["Wi-Fi", "Outdoor seating"],
        photos: &["https://images.unsplash.com/photo-1554118811-1e0d58224f24"],
    },
    PlaceTemplate {
        id: 2,
        name: "City Park",
        place_type: "park",
        rating: 4.2,
        street: "1 Park Avenue",
        description: "Open green space with walking paths and a playground.",
        hours: "6:00 AM - 10:00 PM",
        price: "Free",
        phone: "(555) 200-0002",
        website: "https://example.com/city-park",
        amenities: &["Walking paths", "Playground", "Restrooms"],
        photos: &["https://images.unsplash.com/photo-1519331379826-f10be5486c6f"],
    },
    PlaceTemplate {
        id: 3,
        name: "Town History Museum",
        place_type: "museum",
        rating: 4.3,
        street: "5 Heritage Square",
        description: "Small museum on local history with free entry on Sundays.",
        hours: "10:00 AM - 5:00 PM",
        price: "$",
        phone: "(555) 200-0003",
        website: "https://example.com/history-museum",
        amenities: &["Guided tours", "Gift shop"],
        photos: &["https://images.unsplash.com/photo-1566127444979-b3d2b654e3d7"],
    },
];
