//! Bundled Indonesian vocabulary

use crate::corpus::{Category, Corpus, Word};

fn word(word: &str, meaning: &str, example: &str, example_target: &str) -> Word {
    Word {
        word: word.to_string(),
        meaning: meaning.to_string(),
        example: example.to_string(),
        example_target: example_target.to_string(),
    }
}

/// The vocabulary corpus that ships with the app
///
/// Three categories of fifteen words each. The quiz generator works over
/// any [`Corpus`]; this is the default one used when no remote corpus is
/// available.
pub fn builtin_corpus() -> Corpus {
    Corpus::new(vec![
        Category {
            id: "makanan".to_string(),
            name: "Food & Drinks".to_string(),
            description: "Vocabulary about Indonesian cuisine".to_string(),
            words: vec![
                word("Nasi", "Rice", "I eat rice every day.", "Saya makan nasi setiap hari."),
                word("Air", "Water", "Drinking water is healthy.", "Saya minum air putih setiap hari."),
                word("Makan", "Eat", "We eat together.", "Kita makan bersama."),
                word("Minum", "Drink", "I drink hot tea.", "Saya minum teh panas."),
                word("Roti", "Bread", "I have bread for breakfast.", "Saya sarapan roti setiap pagi."),
                word("Buah", "Fruit", "Fresh fruit is good for your health.", "Buah-buahan segar baik untuk kesehatan."),
                word("Sayur", "Vegetable", "Eat vegetables every day.", "Makan sayur setiap hari itu sehat."),
                word("Daging", "Meat", "Beef is used for the BBQ.", "Daging sapi sering digunakan untuk BBQ."),
                word("Ikan", "Fish", "Grilled fish is very tasty.", "Ikan bakar sangat lezat."),
                word("Telur", "Egg", "I make an omelet for breakfast.", "Saya membuat telur dadar untuk sarapan."),
                word("Susu", "Milk", "I drink milk before bed.", "Saya minum susu sebelum tidur."),
                word("Keju", "Cheese", "Cheese goes well on toast.", "Keju enak dipadukan dengan roti bakar."),
                word("Gula", "Sugar", "Add a little sugar.", "Tambahkan sedikit gula."),
                word("Garam", "Salt", "Salt is used to season food.", "Garam dipakai untuk memberi rasa pada masakan."),
                word("Kopi", "Coffee", "Morning coffee gives me energy.", "Kopi pagi memberi saya semangat."),
            ],
        },
        Category {
            id: "keluarga".to_string(),
            name: "Family".to_string(),
            description: "Family members and relationships".to_string(),
            words: vec![
                word("Ayah", "Father", "Father goes to work.", "Ayah pergi bekerja."),
                word("Ibu", "Mother", "Mother cooks in the kitchen.", "Ibu memasak di dapur."),
                word("Kakak", "Older sibling", "My older sibling is studying.", "Kakak saya sedang belajar."),
                word("Adik", "Younger sibling", "My younger sibling is playing in the park.", "Adik saya sedang bermain di taman."),
                word("Nenek", "Grandmother", "Grandmother tells stories.", "Nenek bercerita tentang masa lalu."),
                word("Kakek", "Grandfather", "Grandfather reads the newspaper.", "Kakek membaca koran setiap pagi."),
                word("Paman", "Uncle", "Uncle came to visit.", "Paman datang berkunjung."),
                word("Bibi", "Aunt", "Aunt brought some gifts.", "Bibi membawa beberapa hadiah."),
                word("Sepupu", "Cousin", "My cousin plays with us.", "Sepupu saya bermain bersama kami."),
                word("Keponakan", "Nephew/Niece", "My niece/nephew is very cute.", "Keponakan saya sangat lucu."),
                word("Suami", "Husband", "The husband left for work.", "Suami berangkat kerja pagi ini."),
                word("Istri", "Wife", "The wife cooks dinner.", "Istri memasakkan makan malam."),
                word("Anak", "Child", "The child plays in the yard.", "Anak itu bermain di halaman."),
                word("Cucu", "Grandchild", "The grandchild visits grandmother.", "Cucu mengunjungi neneknya."),
                word("Keluarga", "Family", "The family gathers at home.", "Keluarga berkumpul di rumah."),
            ],
        },
        Category {
            id: "sehari".to_string(),
            name: "Daily Activities".to_string(),
            description: "Everyday activities and routines".to_string(),
            words: vec![
                word("Belajar", "Study", "I study the Indonesian language.", "Saya belajar bahasa Indonesia."),
                word("Tidur", "Sleep", "Getting enough sleep is important.", "Saya tidur delapan jam setiap malam."),
                word("Bangun", "Wake up", "Waking up early is healthy.", "Saya bangun pagi setiap hari."),
                word("Mandi", "Bath", "Take a shower before leaving.", "Saya mandi setiap pagi."),
                word("Kerja", "Work", "Father goes to work.", "Ayah pergi bekerja ke kantor."),
                word("Sarapan", "Breakfast", "Have breakfast before school.", "Saya sarapan sebelum berangkat."),
                word("Olahraga", "Exercise", "Exercise in the morning.", "Saya berolahraga setiap pagi."),
                word("Membaca", "Reading", "I read a book before bed.", "Saya membaca buku setiap malam."),
                word("Menulis", "Writing", "I write in my diary every day.", "Saya menulis di buku harian setiap hari."),
                word("Bermain", "Playing", "Play with friends.", "Anak-anak bermain di taman."),
                word("Memasak", "Cooking", "Cook dinner.", "Saya memasak makan malam untuk keluarga."),
                word("Berbelanja", "Shopping", "Go shopping at the market.", "Ibu pergi berbelanja di pasar."),
                word("Berjalan", "Walking", "Walk to school.", "Saya berjalan ke sekolah."),
                word("Menonton", "Watching", "Watch a movie at the cinema.", "Kami menonton film bersama."),
                word("Mendengar", "Listening", "Listen to your favorite music.", "Saya mendengarkan musik favorit saya."),
            ],
        },
    ])
}
