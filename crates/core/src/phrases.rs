//! Curated copy that ships with the application.
//!
//! Every phrase is keyed by a stable id such as `hero.title` and carries one
//! string per supported language. These strings win over any dynamic
//! translation and are never replaced at runtime.

use crate::language::LanguageCode;
use crate::language::LanguageCode::*;

#[derive(Debug)]
pub struct Phrase {
    pub key: &'static str,
    translations: &'static [(LanguageCode, &'static str)],
}

impl Phrase {
    pub fn get(&self, lang: LanguageCode) -> Option<&'static str> {
        self.translations
            .iter()
            .find(|(code, _)| *code == lang)
            .map(|(_, text)| *text)
    }
}

pub fn lookup(key: &str, lang: LanguageCode) -> Option<&'static str> {
    PHRASES
        .iter()
        .find(|phrase| phrase.key == key)
        .and_then(|phrase| phrase.get(lang))
}

static PHRASES: &[Phrase] = &[
    Phrase {
        key: "hero.title",
        translations: &[
            (En, "Dairy AI Assistant"),
            (Hi, "डेयरी AI सहायक"),
            (Bn, "ডেইরি AI সহায়ক"),
            (Te, "డెయిరీ AI అసిస్టెంట్"),
            (Mr, "डेअरी AI सहायक"),
            (Ta, "பால் AI உதவியாளர்"),
            (Gu, "ડેરી AI સહાયક"),
            (Ur, "ڈیری AI اسسٹنٹ"),
            (Kn, "ಹಾಲು AI ಸಹಾಯಕ"),
            (Or, "ଡେରି AI ସହାୟକ"),
            (Pa, "ਡੇਅਰੀ AI ਸਹਾਇਕ"),
            (As, "ডেৰী AI সহায়ক"),
            (Ne, "डेरी AI सहायक"),
            (Ml, "പാൽ AI അസിസ്റ്റന്റ്"),
            (Sa, "दुग्ध AI सहायक"),
            (Ks, "ڈیری AI مددگار"),
            (Sd, "ڊيري AI مددگار"),
            (Bo, "འོ་མ་ AI ལས་དོན་དཔྱོད་པ"),
            (Es, "Asistente de IA Láctea"),
            (Fr, "Assistant IA Laitier"),
            (De, "Milchvieh KI-Assistent"),
            (Pt, "Assistente de IA Láctea"),
            (It, "Assistente IA Lattiero"),
            (Ru, "Молочный ИИ Помощник"),
            (Ja, "酪農AIアシスタント"),
            (Ko, "낙농 AI 어시스턴트"),
            (Zh, "乳业AI助手"),
            (Ar, "مساعد الذكاء الاصطناعي للألبان"),
        ],
    },
    Phrase {
        key: "hero.subtitle",
        translations: &[
            (En, "Predict milk yield, detect diseases early, and get expert advice in multiple languages. Empower your dairy farming with AI technology."),
            (Hi, "दूध उत्पादन की भविष्यवाणी करें, बीमारियों का जल्दी पता लगाएं, और कई भाषाओं में विशेषज्ञ सलाह प्राप्त करें। AI तकनीक के साथ अपने डेयरी खेती को सशक्त बनाएं।"),
            (Bn, "দুধের ফলন ভবিষ্যদ্বাণী করুন, রোগের প্রাথমিক সনাক্তকরণ করুন এবং একাধিক ভাষায় বিশেষজ্ঞ পরামর্শ পান। AI প্রযুক্তির সাথে আপনার দুগ্ধ খামারকে শক্তিশালী করুন।"),
            (Te, "పాల ఉత్పాదనను అంచనా వేయండి, వ్యాధులను త్వరగా గుర్తించండి, మరియు బహుళ భాషలలో నిపుణుల సలహా పొందండి। AI సాంకేతికతతో మీ పాల పెంపకాన్ని బలోపేతం చేయండి।"),
            (Mr, "दुधाच्या उत्पादनाचा अंदाज घ्या, रोगांची लवकर ओळख करा, आणि अनेक भाषांमध्ये तज्ञांचा सल्ला घ्या। AI तंत्रज्ञानाने आपल्या दुग्ध व्यवसायाला सक्षम करा।"),
            (Ta, "பால் விளைச்சலை கணிக்கவும், நோய்களை ஆரம்பத்தில் கண்டறியவும், பல மொழிகளில் நிபுணர் ஆலோசனையைப் பெறவும்। AI தொழில்நுட்பத்துடன் உங்கள் பால் வளர்ப்பை வலுப்படுத்தவும்।"),
            (Gu, "દૂધની ઉપજની આગાહી કરો, રોગોની વહેલી ઓળખ કરો, અને બહુવિધ ભાષાઓમાં નિષ્ણાત સલાહ મેળવો। AI ટેક્નોલોજી સાથે તમારા ડેરી ખેતીને સશક્ત બનાવો।"),
            (Ur, "دودھ کی پیداوار کی پیشن گوئی کریں، بیماریوں کی جلدی تشخیص کریں، اور متعدد زبانوں میں ماہرین کی مشاورت حاصل کریں۔ AI ٹیکنالوجی کے ساتھ اپنے ڈیری فارمنگ کو مضبوط بنائیں۔"),
            (Kn, "ಹಾಲಿನ ಇಳುವರಿಯನ್ನು ಊಹಿಸಿ, ರೋಗಗಳನ್ನು ಬೇಗನೆ ಗುರುತಿಸಿ, ಮತ್ತು ಬಹು ಭಾಷೆಗಳಲ್ಲಿ ತಜ್ಞರ ಸಲಹೆ ಪಡೆಯಿರಿ। AI ತಂತ್ರಜ್ಞಾನದೊಂದಿಗೆ ನಿಮ್ಮ ಹಾಲು ಕೃಷಿಯನ್ನು ಶಕ್ತಿಶಾಲಿಯಾಗಿಸಿ।"),
            (Or, "ଦୁଗ୍ଧ ଉତ୍ପାଦନ ଭବିଷ୍ୟତବାଣୀ କରନ୍ତୁ, ରୋଗଗୁଡ଼ିକର ଶୀଘ୍ର ସନ୍ଧାନ କରନ୍ତୁ, ଏବଂ ବହୁ ଭାଷାରେ ବିଶେଷଜ୍ଞ ପରାମର୍ଶ ପାଆନ୍ତୁ। AI ପ୍ରଯୁକ୍ତି ସହିତ ଆପଣଙ୍କ ଡେରି କୃଷିକୁ ସଶକ୍ତ କରନ୍ତୁ।"),
            (Pa, "ਦੁੱਧ ਦੀ ਪੈਦਾਵਾਰ ਦਾ ਅੰਦਾਜ਼ਾ ਲਗਾਓ, ਬੀਮਾਰੀਆਂ ਦੀ ਜਲਦੀ ਪਛਾਣ ਕਰੋ, ਅਤੇ ਕਈ ਭਾਸ਼ਾਵਾਂ ਵਿੱਚ ਮਾਹਿਰ ਸਲਾਹ ਪ੍ਰਾਪਤ ਕਰੋ। AI ਤਕਨਾਲੋਜੀ ਨਾਲ ਆਪਣੇ ਡੇਅਰੀ ਫਾਰਮਿੰਗ ਨੂੰ ਸ਼ਕਤੀਸ਼ਾਲੀ ਬਣਾਓ।"),
            (As, "গাখীৰৰ উৎপাদন ভৱিষ্যতবাণী কৰক, ৰোগৰ প্ৰাৰম্ভিক সনাক্তকৰণ কৰক, আৰু বহু ভাষাত বিশেষজ্ঞৰ পৰামৰ্শ লাভ কৰক। AI প্ৰযুক্তিৰে আপোনাৰ গাখীৰ খেতিক শক্তিশালী কৰক।"),
            (Ne, "दुधको उत्पादनको भविष्यवाणी गर्नुहोस्, रोगहरूको छिटो पहिचान गर्नुहोस्, र धेरै भाषाहरूमा विशेषज्ञ सल्लाह प्राप्त गर्नुहोस्। AI प्रविधिको साथ आफ्नो डेरी खेतीलाई सशक्त बनाउनुहोस्।"),
            (Ml, "പാലിന്റെ വിളവ് പ്രവചിക്കുക, രോഗങ്ങളെ നേരത്തെ കണ്ടെത്തുക, കൂടാതെ ഒന്നിലധികം ഭാഷകളിൽ വിദഗ്ധ ഉപദേശം നേടുക। AI സാങ്കേതികവിദ്യ ഉപയോഗിച്ച് നിങ്ങളുടെ പാൽ കൃഷിയെ ശക്തമാക്കുക।"),
            (Sa, "दुग्धोत्पादनस्य भविष्यवाणीं कुरुत, रोगाणां शीघ्रं निर्णयं कुरुत, बहुभाषासु विशेषज्ञपरामर्शं प्राप्नुत। AI तकनीकेन स्वस्य दुग्धकृषिं सशक्तं कुरुत।"),
            (Ks, "دودھ دی پیداوار دی پیشن گوئی کرو، بیماریاں دی جلدی تشخیص کرو، تے کئی زباناں وچ ماہرین دی مشاورت حاصل کرو۔ AI ٹیکنالوجی نال اپݨے ڈیری فارمنگ کوں مضبوط بݨاؤ۔"),
            (Sd, "ڊيري جي پيداوار جو اندازو لڳايو، بيمارين جي جلدي سڃاڻپ ڪريو، ۽ ڪيترين ئي ٻولين ۾ ماهرن جي صلاح حاصل ڪريو۔ AI ٽيڪنالاجي سان پنهنجي ڊيري فارمنگ کي طاقتور بڻايو۔"),
            (Bo, "འོ་མའི་ཐོན་ཁུངས་ཀྱི་ཕྱི་ལོའི་ཁ་གསལ་བྱེད་པ། ནད་ཡམས་ཀྱི་ཆུང་ཚེས་ཀྱི་ངོས་འཛིན་བྱེད་པ། ཡི་གེ་མང་པོའི་ནང་ཤེས་ཡོན་པའི་གསལ་ཁ་ཐོབ་པ། AI ཅིག་གི་ཐོག་ལས་ཁྱོད་ཀྱི་འོ་མའི་ལས་དོན་ཤུགས་ཆེན་བྱེད་པ།"),
            (Es, "Predice el rendimiento de leche, detecta enfermedades temprano y obtén consejos expertos en múltiples idiomas. Potencia tu ganadería lechera con tecnología de IA."),
            (Fr, "Prédisez le rendement laitier, détectez les maladies tôt et obtenez des conseils d'experts en plusieurs langues. Renforcez votre élevage laitier avec la technologie IA."),
            (De, "Vorhersage der Milchleistung, frühzeitige Erkennung von Krankheiten und Expertenberatung in mehreren Sprachen. Stärken Sie Ihre Milchviehhaltung mit KI-Technologie."),
            (Pt, "Preveja a produção de leite, detecte doenças precocemente e obtenha conselhos de especialistas em vários idiomas. Potencialize sua pecuária leiteira com tecnologia de IA."),
            (It, "Prevedi la resa del latte, rileva le malattie precocemente e ottieni consigli di esperti in più lingue. Potenzia la tua zootecnia da latte con la tecnologia IA."),
            (Ru, "Предсказывайте надой молока, раннее обнаружение болезней и получайте экспертные советы на нескольких языках. Усильте свое молочное животноводство с помощью технологии ИИ."),
            (Ja, "乳量を予測し、病気を早期に発見し、複数の言語で専門家のアドバイスを得てください。AI技術で酪農を強化しましょう。"),
            (Ko, "우유 생산량을 예측하고, 질병을 조기에 발견하며, 여러 언어로 전문가 조언을 받으세요. AI 기술로 낙농을 강화하세요."),
            (Zh, "预测产奶量，早期发现疾病，并获得多语言专家建议。用AI技术增强您的乳业养殖。"),
            (Ar, "توقع إنتاج الحليب، واكتشف الأمراض مبكراً، واحصل على نصائح الخبراء بلغات متعددة. عزز تربية الألبان الخاصة بك بتقنية الذكاء الاصطناعي."),
        ],
    },
    Phrase {
        key: "hero.startPredicting",
        translations: &[
            (En, "Start Predicting"),
            (Hi, "भविष्यवाणी शुरू करें"),
            (Bn, "ভবিষ্যদ্বাণী শুরু করুন"),
            (Te, "అంచనా ప్రారంభించండి"),
            (Mr, "अंदाज सुरू करा"),
            (Ta, "கணிப்பைத் தொடங்குங்கள்"),
            (Gu, "આગાહી શરૂ કરો"),
            (Ur, "پیشن گوئی شروع کریں"),
            (Kn, "ಊಹಿಸಲು ಪ್ರಾರಂಭಿಸಿ"),
            (Or, "ଭବିଷ୍ୟତବାଣୀ ଆରମ୍ଭ କରନ୍ତୁ"),
            (Pa, "ਅੰਦਾਜ਼ਾ ਸ਼ੁਰੂ ਕਰੋ"),
            (As, "ভৱিষ্যতবাণী আৰম্ভ কৰক"),
            (Ne, "भविष्यवाणी सुरु गर्नुहोस्"),
            (Ml, "പ്രവചനം ആരംഭിക്കുക"),
            (Sa, "भविष्यवाणीं आरभ्यताम्"),
            (Ks, "پیشن گوئی شروع کرو"),
            (Sd, "پيشن گوئي شروع ڪريو"),
            (Bo, "ཕྱི་ལོའི་ཁ་གསལ་འགོ་བཙུགས་པ།"),
            (Es, "Comenzar Predicción"),
            (Fr, "Commencer la Prédiction"),
            (De, "Vorhersage Starten"),
            (Pt, "Iniciar Previsão"),
            (It, "Inizia Previsione"),
            (Ru, "Начать Прогнозирование"),
            (Ja, "予測を開始"),
            (Ko, "예측 시작"),
            (Zh, "开始预测"),
            (Ar, "ابدأ التنبؤ"),
        ],
    },
    Phrase {
        key: "hero.chatAssistant",
        translations: &[
            (En, "Chat with AI Assistant"),
            (Hi, "AI सहायक से चैट करें"),
            (Bn, "AI সহায়কের সাথে চ্যাট করুন"),
            (Te, "AI అసిస్టెంట్ తో చాట్ చేయండి"),
            (Mr, "AI सहायकाशी चॅट करा"),
            (Ta, "AI உதவியாளருடன் அரட்டையடிக்கவும்"),
            (Gu, "AI સહાયક સાથે ચેટ કરો"),
            (Ur, "AI اسسٹنٹ کے ساتھ چیٹ کریں"),
            (Kn, "AI ಸಹಾಯಕರೊಂದಿಗೆ ಚಾಟ್ ಮಾಡಿ"),
            (Or, "AI ସହାୟକ ସହିତ ଚାଟ୍ କରନ୍ତୁ"),
            (Pa, "AI ਸਹਾਇਕ ਨਾਲ ਚੈਟ ਕਰੋ"),
            (As, "AI সহায়কৰ সৈতে চেট কৰক"),
            (Ne, "AI सहायकसँग च्याट गर्नुहोस्"),
            (Ml, "AI അസിസ്റ്റന്റുമായി ചാറ്റ് ചെയ്യുക"),
            (Sa, "AI सहायकेन सह चर्चां कुरुत"),
            (Ks, "AI مددگار نال چیٹ کرو"),
            (Sd, "AI مددگار سان گالھ ڪريو"),
            (Bo, "AI ལས་དོན་དཔྱོད་པ་དང་ཞུ་ཆུང་བྱེད་པ།"),
            (Es, "Chatear con Asistente IA"),
            (Fr, "Discuter avec l'Assistant IA"),
            (De, "Mit KI-Assistent Chatten"),
            (Pt, "Conversar com Assistente IA"),
            (It, "Chatta con Assistente IA"),
            (Ru, "Чат с ИИ Помощником"),
            (Ja, "AIアシスタントとチャット"),
            (Ko, "AI 어시스턴트와 채팅"),
            (Zh, "与AI助手聊天"),
            (Ar, "تحدث مع مساعد الذكاء الاصطناعي"),
        ],
    },
    Phrase {
        key: "hero.farmersHelped",
        translations: &[
            (En, "Farmers Helped"),
            (Hi, "किसानों की मदद की"),
            (Bn, "কৃষকদের সাহায্য"),
            (Te, "రైతులకు సహాయం"),
            (Mr, "शेतकऱ्यांना मदत"),
            (Ta, "விவசாயிகளுக்கு உதவி"),
            (Gu, "કૃષકોને મદદ"),
            (Ur, "کسانوں کی مدد"),
            (Kn, "ರೈತರಿಗೆ ಸಹಾಯ"),
            (Or, "କୃଷକଙ୍କୁ ସାହାଯ୍ୟ"),
            (Pa, "ਕਿਸਾਨਾਂ ਦੀ ਮਦਦ"),
            (As, "খেতিয়কসকলক সহায়তা"),
            (Ne, "किसानहरूलाई मद्दत"),
            (Ml, "കർഷകർക്ക് സഹായം"),
            (Sa, "कृषकानां साहाय्यम्"),
            (Ks, "کساناں دی مدد"),
            (Sd, "کسانن جي مدد"),
            (Bo, "ཞིང་པ་རྣམས་ལ་རོགས་རམ།"),
            (Es, "Agricultores Ayudados"),
            (Fr, "Agriculteurs Aidés"),
            (De, "Landwirten Geholfen"),
            (Pt, "Agricultores Ajudados"),
            (It, "Agricoltori Aiutati"),
            (Ru, "Помогли Фермерам"),
            (Ja, "支援した農家"),
            (Ko, "도움받은 농부"),
            (Zh, "帮助的农民"),
            (Ar, "المزارعون المساعدون"),
        ],
    },
    Phrase {
        key: "hero.predictionAccuracy",
        translations: &[
            (En, "Prediction Accuracy"),
            (Hi, "भविष्यवाणी सटीकता"),
            (Bn, "ভবিষ্যদ্বাণীর নির্ভুলতা"),
            (Te, "అంచనా ఖచ్చితత్వం"),
            (Mr, "अंदाजाची अचूकता"),
            (Ta, "கணிப்பு துல்லியம்"),
            (Gu, "આગાહીની ચોકસાઈ"),
            (Ur, "پیشن گوئی کی درستگی"),
            (Kn, "ಊಹೆಯ ನಿಖರತೆ"),
            (Or, "ଭବିଷ୍ୟତବାଣୀର ସଠିକତା"),
            (Pa, "ਅੰਦਾਜ਼ੇ ਦੀ ਸ਼ੁੱਧਤਾ"),
            (As, "ভৱিষ্যতবাণীৰ সঠিকতা"),
            (Ne, "भविष्यवाणीको शुद्धता"),
            (Ml, "പ്രവചനത്തിന്റെ കൃത്യത"),
            (Sa, "भविष्यवाण्याः शुद्धता"),
            (Ks, "پیشن گوئی دی درستگی"),
            (Sd, "پيشن گوئي جي درستگي"),
            (Bo, "ཕྱི་ལོའི་ཁ་གསལ་གྱི་ཆ་ཤས་ཆེན་པོ།"),
            (Es, "Precisión de Predicción"),
            (Fr, "Précision de Prédiction"),
            (De, "Vorhersagegenauigkeit"),
            (Pt, "Precisão da Previsão"),
            (It, "Precisione della Previsione"),
            (Ru, "Точность Прогнозирования"),
            (Ja, "予測精度"),
            (Ko, "예측 정확도"),
            (Zh, "预测准确性"),
            (Ar, "دقة التنبؤ"),
        ],
    },
    Phrase {
        key: "hero.aiSupport",
        translations: &[
            (En, "AI Support"),
            (Hi, "AI सहायता"),
            (Bn, "AI সহায়তা"),
            (Te, "AI మద్దతు"),
            (Mr, "AI समर्थन"),
            (Ta, "AI ஆதரவு"),
            (Gu, "AI સહાયતા"),
            (Ur, "AI سپورٹ"),
            (Kn, "AI ಬೆಂಬಲ"),
            (Or, "AI ସହାୟତା"),
            (Pa, "AI ਸਹਾਇਤਾ"),
            (As, "AI সহায়তা"),
            (Ne, "AI सहयोग"),
            (Ml, "AI പിന്തുണ"),
            (Sa, "AI साहाय्यम्"),
            (Ks, "AI مدد"),
            (Sd, "AI مدد"),
            (Bo, "AI རོགས་རམ།"),
            (Es, "Soporte IA"),
            (Fr, "Support IA"),
            (De, "KI-Unterstützung"),
            (Pt, "Suporte IA"),
            (It, "Supporto IA"),
            (Ru, "ИИ Поддержка"),
            (Ja, "AIサポート"),
            (Ko, "AI 지원"),
            (Zh, "AI支持"),
            (Ar, "دعم الذكاء الاصطناعي"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phrase_covers_every_language_once() {
        for phrase in PHRASES {
            for lang in LanguageCode::ALL {
                let hits = phrase
                    .translations
                    .iter()
                    .filter(|(code, _)| *code == lang)
                    .count();
                assert_eq!(hits, 1, "{} has {hits} entries for {lang}", phrase.key);
            }
        }
    }

    #[test]
    fn hindi_hero_title_is_curated() {
        assert_eq!(lookup("hero.title", Hi), Some("डेयरी AI सहायक"));
    }

    #[test]
    fn english_entry_is_the_source_copy() {
        assert_eq!(lookup("hero.startPredicting", En), Some("Start Predicting"));
    }

    #[test]
    fn unknown_key_is_absent() {
        assert_eq!(lookup("Select breed", Fr), None);
        assert!(PHRASES.iter().all(|phrase| phrase.key != "Select breed"));
    }

    #[test]
    fn keys_are_unique() {
        let mut all: Vec<_> = PHRASES.iter().map(|phrase| phrase.key).collect();
        let before = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), before);
        assert_eq!(before, 7);
    }
}
