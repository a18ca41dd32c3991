// Built in default permission classification database.
// A permission may appear under several classes; the loader keeps the
// highest tier and the richest group/description for each name.
pub static PERMISSION_RISK_DB: &str = r#"{
  "date": "March 25th 2025",
  "signature": "822b0e15a47848ed276db6f2f034404dc59a83412796d654743e4df1e9ccf851",
  "permissions": [
    {
      "name": "android.permission.CAMERA",
      "class": "critical",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.CAMERA",
      "class": "dangerous",
      "group": "Camera",
      "description": "Allows the app to take pictures and record video with the camera"
    },
    {
      "name": "android.permission.RECORD_AUDIO",
      "class": "critical",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.RECORD_AUDIO",
      "class": "dangerous",
      "group": "Microphone",
      "description": "Allows the app to record audio with the microphone"
    },
    {
      "name": "android.permission.ACCESS_FINE_LOCATION",
      "class": "critical",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.ACCESS_FINE_LOCATION",
      "class": "dangerous",
      "group": "Location",
      "description": "Allows the app to get your precise location (GPS)"
    },
    {
      "name": "android.permission.ACCESS_BACKGROUND_LOCATION",
      "class": "critical",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.ACCESS_BACKGROUND_LOCATION",
      "class": "dangerous",
      "group": "Location",
      "description": "Allows the app to access your location while in the background"
    },
    {
      "name": "android.permission.READ_SMS",
      "class": "critical",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.READ_SMS",
      "class": "dangerous",
      "group": "SMS",
      "description": "Allows the app to read your text messages"
    },
    {
      "name": "android.permission.SEND_SMS",
      "class": "critical",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.SEND_SMS",
      "class": "dangerous",
      "group": "SMS",
      "description": "Allows the app to send text messages"
    },
    {
      "name": "android.permission.READ_CALL_LOG",
      "class": "critical",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.READ_CALL_LOG",
      "class": "dangerous",
      "group": "Calls",
      "description": "Allows the app to read your call log"
    },
    {
      "name": "android.permission.READ_CONTACTS",
      "class": "critical",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.READ_CONTACTS",
      "class": "dangerous",
      "group": "Contacts",
      "description": "Allows the app to read your contacts"
    },
    {
      "name": "android.permission.BODY_SENSORS_BACKGROUND",
      "class": "critical",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.BODY_SENSORS_BACKGROUND",
      "class": "dangerous",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.READ_CALENDAR",
      "class": "dangerous",
      "group": "Calendar",
      "description": "Allows the app to read your calendar"
    },
    {
      "name": "android.permission.WRITE_CALENDAR",
      "class": "dangerous",
      "group": "Calendar",
      "description": "Allows the app to modify your calendar"
    },
    {
      "name": "android.permission.WRITE_CONTACTS",
      "class": "dangerous",
      "group": "Contacts",
      "description": "Allows the app to modify your contacts"
    },
    {
      "name": "android.permission.GET_ACCOUNTS",
      "class": "dangerous",
      "group": "Contacts",
      "description": ""
    },
    {
      "name": "android.permission.GET_ACCOUNTS",
      "class": "sensitive",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.ACCESS_COARSE_LOCATION",
      "class": "dangerous",
      "group": "Location",
      "description": "Allows the app to get your approximate location (network-based)"
    },
    {
      "name": "android.permission.ACCESS_COARSE_LOCATION",
      "class": "sensitive",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.READ_PHONE_STATE",
      "class": "dangerous",
      "group": "Phone",
      "description": "Allows the app to read phone status and identity"
    },
    {
      "name": "android.permission.READ_PHONE_STATE",
      "class": "sensitive",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.READ_PHONE_NUMBERS",
      "class": "dangerous",
      "group": "Phone",
      "description": ""
    },
    {
      "name": "android.permission.CALL_PHONE",
      "class": "dangerous",
      "group": "Calls",
      "description": "Allows the app to place phone calls directly"
    },
    {
      "name": "android.permission.ANSWER_PHONE_CALLS",
      "class": "dangerous",
      "group": "Calls",
      "description": ""
    },
    {
      "name": "android.permission.WRITE_CALL_LOG",
      "class": "dangerous",
      "group": "Calls",
      "description": "Allows the app to modify your call log"
    },
    {
      "name": "android.permission.ADD_VOICEMAIL",
      "class": "dangerous",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.USE_SIP",
      "class": "dangerous",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.PROCESS_OUTGOING_CALLS",
      "class": "dangerous",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.BODY_SENSORS",
      "class": "dangerous",
      "group": "Sensors",
      "description": "Allows the app to access body sensors such as heart rate"
    },
    {
      "name": "android.permission.RECEIVE_SMS",
      "class": "dangerous",
      "group": "SMS",
      "description": "Allows the app to receive text messages"
    },
    {
      "name": "android.permission.RECEIVE_WAP_PUSH",
      "class": "dangerous",
      "group": "SMS",
      "description": ""
    },
    {
      "name": "android.permission.RECEIVE_MMS",
      "class": "dangerous",
      "group": "SMS",
      "description": ""
    },
    {
      "name": "android.permission.READ_EXTERNAL_STORAGE",
      "class": "dangerous",
      "group": "Storage",
      "description": "Allows the app to read shared storage"
    },
    {
      "name": "android.permission.READ_EXTERNAL_STORAGE",
      "class": "sensitive",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.WRITE_EXTERNAL_STORAGE",
      "class": "dangerous",
      "group": "Storage",
      "description": "Allows the app to write to shared storage"
    },
    {
      "name": "android.permission.WRITE_EXTERNAL_STORAGE",
      "class": "sensitive",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.READ_MEDIA_IMAGES",
      "class": "dangerous",
      "group": "Media",
      "description": "Allows the app to read images from storage"
    },
    {
      "name": "android.permission.READ_MEDIA_IMAGES",
      "class": "sensitive",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.READ_MEDIA_VIDEO",
      "class": "dangerous",
      "group": "Media",
      "description": "Allows the app to read videos from storage"
    },
    {
      "name": "android.permission.READ_MEDIA_VIDEO",
      "class": "sensitive",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.READ_MEDIA_AUDIO",
      "class": "dangerous",
      "group": "Media",
      "description": "Allows the app to read audio files from storage"
    },
    {
      "name": "android.permission.READ_MEDIA_AUDIO",
      "class": "sensitive",
      "group": "",
      "description": ""
    },
    {
      "name": "android.permission.POST_NOTIFICATIONS",
      "class": "dangerous",
      "group": "Notifications",
      "description": "Allows the app to post notifications"
    },
    {
      "name": "android.permission.NEARBY_WIFI_DEVICES",
      "class": "dangerous",
      "group": "",
      "description": ""
    }
  ]
}"#;
