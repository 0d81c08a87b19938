//! Editorial content inserted on first run.

use guide_core::Category;

pub(super) struct SeedDestination {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    pub image: &'static str,
    pub category: Category,
    pub sub_category: Option<&'static str>,
}

pub(super) struct SeedHero {
    pub category: Category,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub image: &'static str,
    pub long_description: Option<&'static str>,
}

pub(super) struct SeedCarouselImage {
    pub image: &'static str,
    pub caption: Option<&'static str>,
    pub sub_category: Option<&'static str>,
}

pub(super) const DESTINATIONS: &[SeedDestination] = &[
    SeedDestination {
        title: "Hero Section",
        description: "High-resolution photo for the main banner.",
        long_description: None,
        image: "hero-image.svg",
        category: Category::Hero,
        sub_category: None,
    },
    SeedDestination {
        title: "About Incredible India",
        description: "A guide to the people, places and plates of the subcontinent.",
        long_description: Some(
            "This guide collects festivals, monuments, landscapes and regional kitchens \
             from across India, with notes on when to visit and what to look for.",
        ),
        image: "about.svg",
        category: Category::About,
        sub_category: None,
    },
    SeedDestination {
        title: "Vibrant Festivals",
        description: "Experience the colorful celebrations that light up India's calendar, from Diwali to Holi.",
        long_description: Some(
            "Hardly a week passes without a festival somewhere in India. Harvest fairs, \
             temple processions and city-wide celebrations fill the calendar year round.",
        ),
        image: "festival.svg",
        category: Category::Culture,
        sub_category: Some("Vibrant Festivals"),
    },
    SeedDestination {
        title: "Rich Traditions",
        description: "Discover the ancient customs and diverse heritage that define Indian society.",
        long_description: None,
        image: "tradition.svg",
        category: Category::Culture,
        sub_category: None,
    },
    SeedDestination {
        title: "Diverse Arts",
        description: "Explore classical dance forms, intricate music, and beautiful craftsmanship.",
        long_description: None,
        image: "art.svg",
        category: Category::Culture,
        sub_category: Some("Diverse Arts"),
    },
    SeedDestination {
        title: "Ancient Forts & Palaces",
        description: "Explore the majestic forts and opulent palaces that tell a tale of India's royal past.",
        long_description: Some(
            "From the hill forts of Rajasthan to the palaces of Mysore, royal architecture \
             records centuries of dynasties, trade and war.",
        ),
        image: "history.svg",
        category: Category::History,
        sub_category: None,
    },
    SeedDestination {
        title: "Himalayan Landscapes",
        description: "Discover the breathtaking beauty of the Himalayas, from snowy peaks to lush valleys.",
        long_description: Some(
            "The Himalayan states offer high passes, glacial lakes and rhododendron forests. \
             Late spring and early autumn bring the clearest views.",
        ),
        image: "nature.svg",
        category: Category::Nature,
        sub_category: None,
    },
    SeedDestination {
        title: "Diwali",
        description: "The festival of lights, celebrated with lamps, sweets and fireworks.",
        long_description: Some(
            "Held over five days in October or November, Diwali marks the return of Rama \
             to Ayodhya. Homes are lit with clay lamps and families exchange sweets.",
        ),
        image: "diwali.svg",
        category: Category::Culture,
        sub_category: Some("Vibrant Festivals"),
    },
    SeedDestination {
        title: "Holi",
        description: "The spring festival of colours, famous for its clouds of coloured powder.",
        long_description: Some(
            "Holi welcomes spring on the full moon of Phalguna. Bonfires burn on the first \
             night and the streets fill with coloured powder and water the next morning.",
        ),
        image: "holi.svg",
        category: Category::Culture,
        sub_category: Some("Vibrant Festivals"),
    },
    SeedDestination {
        title: "Bharatanatyam",
        description: "A classical dance form from Tamil Nadu told through gesture and rhythm.",
        long_description: None,
        image: "bharatanatyam.svg",
        category: Category::Culture,
        sub_category: Some("Diverse Arts"),
    },
    SeedDestination {
        title: "Temples of the South",
        description: "Towering gopurams and carved halls built by the Chola and Pandya kings.",
        long_description: None,
        image: "temples.svg",
        category: Category::History,
        sub_category: None,
    },
    SeedDestination {
        title: "Kerala Backwaters",
        description: "A maze of lagoons and canals best explored from a slow houseboat.",
        long_description: None,
        image: "backwaters.svg",
        category: Category::Nature,
        sub_category: None,
    },
    SeedDestination {
        title: "Butter Chicken",
        description: "Tandoori chicken simmered in a mild tomato and butter gravy.",
        long_description: Some(
            "Created in Delhi kitchens in the mid twentieth century, butter chicken is now \
             served wherever North Indian food is cooked. Eat it with naan.",
        ),
        image: "butter-chicken.svg",
        category: Category::Cuisine,
        sub_category: Some("North Indian"),
    },
    SeedDestination {
        title: "Chole Bhature",
        description: "Spiced chickpeas with puffed fried bread, a Punjabi breakfast favourite.",
        long_description: None,
        image: "chole-bhature.svg",
        category: Category::Cuisine,
        sub_category: Some("North Indian"),
    },
    SeedDestination {
        title: "Masala Dosa",
        description: "A crisp fermented rice crepe filled with spiced potato.",
        long_description: Some(
            "Served with coconut chutney and sambar, the masala dosa is the signature \
             breakfast of Karnataka and Tamil Nadu.",
        ),
        image: "masala-dosa.svg",
        category: Category::Cuisine,
        sub_category: Some("South Indian"),
    },
    SeedDestination {
        title: "Hyderabadi Biryani",
        description: "Layered rice and meat cooked slowly under a sealed lid.",
        long_description: None,
        image: "biryani.svg",
        category: Category::Cuisine,
        sub_category: Some("South Indian"),
    },
    SeedDestination {
        title: "Pani Puri",
        description: "Hollow crisp shells filled with tangy tamarind and mint water.",
        long_description: None,
        image: "pani-puri.svg",
        category: Category::Cuisine,
        sub_category: Some("Street Food"),
    },
    SeedDestination {
        title: "Vada Pav",
        description: "Mumbai's spiced potato fritter in a soft bun.",
        long_description: None,
        image: "vada-pav.svg",
        category: Category::Cuisine,
        sub_category: Some("Street Food"),
    },
    SeedDestination {
        title: "Gulab Jamun",
        description: "Milk dumplings fried golden and soaked in rose syrup.",
        long_description: None,
        image: "gulab-jamun.svg",
        category: Category::Cuisine,
        sub_category: Some("Sweets & Desserts"),
    },
    SeedDestination {
        title: "Rasgulla",
        description: "Soft cheese balls poached in light sugar syrup, a Bengali classic.",
        long_description: None,
        image: "rasgulla.svg",
        category: Category::Cuisine,
        sub_category: Some("Sweets & Desserts"),
    },
];

pub(super) const CATEGORY_HEROES: &[SeedHero] = &[
    SeedHero {
        category: Category::Culture,
        title: "Culture",
        subtitle: Some("Festivals, traditions and living arts"),
        image: "culture-hero.svg",
        long_description: Some(
            "India's cultures change every few hundred kilometres. Start with the festivals \
             and the arts that keep old stories alive.",
        ),
    },
    SeedHero {
        category: Category::History,
        title: "History",
        subtitle: Some("Five thousand years in stone"),
        image: "history-hero.svg",
        long_description: None,
    },
    SeedHero {
        category: Category::Nature,
        title: "Nature",
        subtitle: Some("From glaciers to mangroves"),
        image: "nature-hero.svg",
        long_description: None,
    },
    SeedHero {
        category: Category::Cuisine,
        title: "Cuisine",
        subtitle: Some("A menu of regional kitchens"),
        image: "cuisine-hero.svg",
        long_description: Some(
            "Every region cooks differently. Pick a style below to see its signature dishes.",
        ),
    },
    SeedHero {
        category: Category::About,
        title: "About",
        subtitle: Some("Who we are"),
        image: "about-hero.svg",
        long_description: None,
    },
];

pub(super) const CAROUSEL_IMAGES: &[SeedCarouselImage] = &[
    SeedCarouselImage {
        image: "cuisine1.svg",
        caption: Some("A taste of North Indian cuisine."),
        sub_category: None,
    },
    SeedCarouselImage {
        image: "cuisine2.svg",
        caption: Some("Spicy and flavorful South Indian dishes."),
        sub_category: None,
    },
    SeedCarouselImage {
        image: "cuisine3.svg",
        caption: Some("Delicious and traditional Indian sweets."),
        sub_category: None,
    },
    SeedCarouselImage {
        image: "north-indian-thali.svg",
        caption: Some("A North Indian thali."),
        sub_category: Some("North Indian"),
    },
    SeedCarouselImage {
        image: "south-indian-meals.svg",
        caption: Some("Meals served on a banana leaf."),
        sub_category: Some("South Indian"),
    },
    SeedCarouselImage {
        image: "street-food-stall.svg",
        caption: Some("An evening chaat stall."),
        sub_category: Some("Street Food"),
    },
    SeedCarouselImage {
        image: "sweet-shop.svg",
        caption: Some("Trays at a mithai shop."),
        sub_category: Some("Sweets & Desserts"),
    },
];
